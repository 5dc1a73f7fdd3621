use aw_action_data::{
    ColorCommand, Command, CoronaCommand, InvalidCommand, LightCommand, MediaCommand, MoveCommand, NameCommand,
    NoiseCommand, PictureCommand, RotateCommand, ScaleCommand, SignCommand, SolidCommand, SoundCommand,
    TeleportCommand, TextureCommand, UrlCommand, VisibleCommand, WarpCommand,
};
use log::debug;
use pest::iterators::Pair;

use crate::resolve::{resolve_color, resolve_coordinates, resolve_scale};

use super::coordinates::parse_world_coordinates;
use super::helpers::{
    arguments, assign, param_text, param_value, parse_boolean, parse_coordinate_list, parse_float, parse_integer,
    parse_signed_float, parse_status, unquote,
};
use super::{AstError, Rule};

/// Evaluate one command pair. A duplicated attribute invalidates the whole
/// command and yields `None`.
pub(super) fn parse_command_pair(pair: Pair<'_, Rule>) -> Result<Option<Command>, AstError> {
    let text = pair.as_str();
    let built = match pair.as_rule() {
        Rule::texture_command => parse_texture(pair).map(Command::Texture),
        Rule::sound_command => parse_sound(pair).map(Command::Sound),
        Rule::corona_command => parse_corona(pair).map(Command::Corona),
        Rule::color_command => parse_color(pair).map(Command::Color),
        Rule::examine_command => Ok(Command::Examine),
        Rule::solid_command => parse_toggle(pair).map(|(value, target_name)| {
            Command::Solid(SolidCommand { value, target_name })
        }),
        Rule::name_command => parse_name(pair).map(Command::Name),
        Rule::visible_command => parse_toggle(pair).map(|(value, target_name)| {
            Command::Visible(VisibleCommand { value, target_name })
        }),
        Rule::move_command => parse_move(pair).map(Command::Move),
        Rule::rotate_command => parse_rotate(pair).map(Command::Rotate),
        Rule::scale_command => parse_scale(pair).map(Command::Scale),
        Rule::light_command => parse_light(pair).map(Command::Light),
        Rule::noise_command => parse_noise(pair).map(Command::Noise),
        Rule::picture_command => parse_picture(pair).map(Command::Picture),
        Rule::media_command => parse_media(pair).map(Command::Media),
        Rule::sign_command => parse_sign(pair).map(Command::Sign),
        Rule::teleport_command => parse_teleport(pair).map(Command::Teleport),
        Rule::warp_command => parse_warp(pair).map(Command::Warp),
        Rule::url_command => parse_url(pair).map(Command::Url),
        Rule::invalid_command => Ok(Command::Invalid(InvalidCommand { command_text: text.to_string() })),
        _ => return Err(AstError::Shape("unknown command rule")),
    };
    match built {
        Ok(command) => Ok(Some(command)),
        Err(AstError::DuplicateAttribute(key)) => {
            debug!("dropping command '{text}': attribute '{key}' given more than once");
            Ok(None)
        },
        Err(e) => Err(e),
    }
}

fn parse_texture(pair: Pair<'_, Rule>) -> Result<TextureCommand, AstError> {
    let mut cmd = TextureCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::mask_param => assign(&mut cmd.mask, param_text(arg)?, "mask")?,
            Rule::tag_param => assign(&mut cmd.tag, param_text(arg)?, "tag")?,
            Rule::basic_resource => assign(&mut cmd.texture, arg.as_str().to_string(), "texture")?,
            _ => return Err(AstError::Shape("unexpected texture argument")),
        }
    }
    Ok(cmd)
}

fn parse_sound(pair: Pair<'_, Rule>) -> Result<SoundCommand, AstError> {
    let mut cmd = SoundCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::resource_target => assign(&mut cmd.resource, arg.as_str().to_string(), "resource")?,
            _ => return Err(AstError::Shape("unexpected sound argument")),
        }
    }
    Ok(cmd)
}

fn parse_corona(pair: Pair<'_, Rule>) -> Result<CoronaCommand, AstError> {
    let mut cmd = CoronaCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::mask_param => assign(&mut cmd.mask, param_text(arg)?, "mask")?,
            Rule::size_param => assign(&mut cmd.size, parse_integer(&param_value(arg)?), "size")?,
            Rule::basic_resource => assign(&mut cmd.resource, arg.as_str().to_string(), "resource")?,
            _ => return Err(AstError::Shape("unexpected corona argument")),
        }
    }
    Ok(cmd)
}

fn parse_color(pair: Pair<'_, Rule>) -> Result<ColorCommand, AstError> {
    let mut cmd = ColorCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::tint_flag => assign(&mut cmd.tint, true, "tint")?,
            Rule::color_name => {
                if let Some(color) = resolve_color(arg.as_str()) {
                    assign(&mut cmd.color, color, "color")?;
                }
            },
            _ => return Err(AstError::Shape("unexpected color argument")),
        }
    }
    Ok(cmd)
}

/// Shared by `solid` and `visible`: a boolean plus an optional target, given
/// either bare or as `name=`.
fn parse_toggle(pair: Pair<'_, Rule>) -> Result<(Option<bool>, Option<String>), AstError> {
    let mut value = None;
    let mut target_name = None;
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::boolean => assign(&mut value, parse_boolean(arg.as_str())?, "value")?,
            Rule::name_param => assign(&mut target_name, param_text(arg)?, "targetName")?,
            Rule::object_name => assign(&mut target_name, arg.as_str().to_string(), "targetName")?,
            _ => return Err(AstError::Shape("unexpected toggle argument")),
        }
    }
    Ok((value, target_name))
}

fn parse_name(pair: Pair<'_, Rule>) -> Result<NameCommand, AstError> {
    let mut cmd = NameCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::object_name => assign(&mut cmd.target_name, arg.as_str().to_string(), "targetName")?,
            _ => return Err(AstError::Shape("unexpected name argument")),
        }
    }
    Ok(cmd)
}

fn parse_move(pair: Pair<'_, Rule>) -> Result<MoveCommand, AstError> {
    let mut cmd = MoveCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::time_param => assign(&mut cmd.time, parse_float(param_value(arg)?)?, "time")?,
            Rule::wait_param => assign(&mut cmd.wait, parse_float(param_value(arg)?)?, "wait")?,
            Rule::loop_status => assign(&mut cmd.looping, parse_status(&arg, "loop"), "loop")?,
            Rule::reset_status => assign(&mut cmd.reset, parse_status(&arg, "reset"), "reset")?,
            Rule::sync_status => assign(&mut cmd.sync, parse_status(&arg, "sync"), "sync")?,
            Rule::smooth_flag => assign(&mut cmd.smooth, true, "smooth")?,
            Rule::global_flag => assign(&mut cmd.global, true, "global")?,
            Rule::coordinate_list => {
                let values = parse_coordinate_list(arg)?;
                assign(&mut cmd.distance, resolve_coordinates(&values), "distance")?;
            },
            _ => return Err(AstError::Shape("unexpected move argument")),
        }
    }
    Ok(cmd)
}

fn parse_rotate(pair: Pair<'_, Rule>) -> Result<RotateCommand, AstError> {
    let mut cmd = RotateCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::time_param => assign(&mut cmd.time, parse_float(param_value(arg)?)?, "time")?,
            Rule::wait_param => assign(&mut cmd.wait, parse_float(param_value(arg)?)?, "wait")?,
            Rule::loop_status => assign(&mut cmd.looping, parse_status(&arg, "loop"), "loop")?,
            Rule::reset_status => assign(&mut cmd.reset, parse_status(&arg, "reset"), "reset")?,
            Rule::sync_status => assign(&mut cmd.sync, parse_status(&arg, "sync"), "sync")?,
            Rule::coordinate_list => {
                let values = parse_coordinate_list(arg)?;
                assign(&mut cmd.speed, resolve_coordinates(&values), "speed")?;
            },
            _ => return Err(AstError::Shape("unexpected rotate argument")),
        }
    }
    Ok(cmd)
}

fn parse_scale(pair: Pair<'_, Rule>) -> Result<ScaleCommand, AstError> {
    let mut cmd = ScaleCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::coordinate_list => {
                let values = parse_coordinate_list(arg)?;
                assign(&mut cmd.factor, resolve_scale(&values), "factor")?;
            },
            _ => return Err(AstError::Shape("unexpected scale argument")),
        }
    }
    Ok(cmd)
}

fn parse_light(pair: Pair<'_, Rule>) -> Result<LightCommand, AstError> {
    let mut cmd = LightCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::color_param => {
                if let Some(color) = resolve_color(param_value(arg)?.as_str()) {
                    assign(&mut cmd.color, color, "color")?;
                }
            },
            Rule::brightness_param => assign(&mut cmd.brightness, parse_float(param_value(arg)?)?, "brightness")?,
            Rule::radius_param => assign(&mut cmd.radius, parse_float(param_value(arg)?)?, "radius")?,
            Rule::type_param => assign(&mut cmd.light_type, param_text(arg)?, "type")?,
            Rule::fx_param => assign(&mut cmd.fx, param_text(arg)?, "fx")?,
            Rule::time_param => assign(&mut cmd.time, parse_float(param_value(arg)?)?, "time")?,
            Rule::angle_param => assign(&mut cmd.angle, parse_signed_float(param_value(arg)?)?, "angle")?,
            Rule::pitch_param => assign(&mut cmd.pitch, parse_signed_float(param_value(arg)?)?, "pitch")?,
            _ => return Err(AstError::Shape("unexpected light argument")),
        }
    }
    Ok(cmd)
}

fn parse_noise(pair: Pair<'_, Rule>) -> Result<NoiseCommand, AstError> {
    let mut cmd = NoiseCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            // recognized, no effect
            Rule::overlap_flag => {},
            Rule::resource_target => assign(&mut cmd.resource, arg.as_str().to_string(), "resource")?,
            _ => return Err(AstError::Shape("unexpected noise argument")),
        }
    }
    Ok(cmd)
}

fn parse_picture(pair: Pair<'_, Rule>) -> Result<PictureCommand, AstError> {
    let mut cmd = PictureCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::update_param => assign(&mut cmd.update, parse_integer(&param_value(arg)?), "update")?,
            Rule::resource_target => assign(&mut cmd.resource, arg.as_str().to_string(), "resource")?,
            _ => return Err(AstError::Shape("unexpected picture argument")),
        }
    }
    Ok(cmd)
}

fn parse_media(pair: Pair<'_, Rule>) -> Result<MediaCommand, AstError> {
    let mut cmd = MediaCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::radius_param => assign(&mut cmd.radius, parse_float(param_value(arg)?)?, "radius")?,
            Rule::resource_target => assign(&mut cmd.resource, arg.as_str().to_string(), "resource")?,
            _ => return Err(AstError::Shape("unexpected media argument")),
        }
    }
    Ok(cmd)
}

fn parse_sign(pair: Pair<'_, Rule>) -> Result<SignCommand, AstError> {
    let mut cmd = SignCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::name_param => assign(&mut cmd.target_name, param_text(arg)?, "targetName")?,
            Rule::color_param => {
                if let Some(color) = resolve_color(param_value(arg)?.as_str()) {
                    assign(&mut cmd.color, color, "color")?;
                }
            },
            Rule::bcolor_param => {
                if let Some(color) = resolve_color(param_value(arg)?.as_str()) {
                    assign(&mut cmd.bcolor, color, "bcolor")?;
                }
            },
            Rule::sign_text => assign(&mut cmd.text, unquote(arg.as_str()), "text")?,
            _ => return Err(AstError::Shape("unexpected sign argument")),
        }
    }
    Ok(cmd)
}

fn parse_teleport(pair: Pair<'_, Rule>) -> Result<TeleportCommand, AstError> {
    let mut cmd = TeleportCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::world_name => assign(&mut cmd.world_name, arg.as_str().to_string(), "worldName")?,
            Rule::world_coordinates => {
                assign(&mut cmd.coordinates, parse_world_coordinates(arg)?, "coordinates")?;
            },
            _ => return Err(AstError::Shape("unexpected teleport argument")),
        }
    }
    Ok(cmd)
}

fn parse_warp(pair: Pair<'_, Rule>) -> Result<WarpCommand, AstError> {
    let block = arguments(pair).next().ok_or(AstError::Shape("warp without coordinates"))?;
    Ok(WarpCommand { position: parse_world_coordinates(block)? })
}

fn parse_url(pair: Pair<'_, Rule>) -> Result<UrlCommand, AstError> {
    let mut cmd = UrlCommand::default();
    for arg in arguments(pair) {
        match arg.as_rule() {
            Rule::resource_target => assign(&mut cmd.resource, arg.as_str().to_string(), "resource")?,
            _ => return Err(AstError::Shape("unexpected url argument")),
        }
    }
    Ok(cmd)
}
