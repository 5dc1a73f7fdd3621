use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Final parse result: surviving triggers in order of first appearance, each
/// with its normalized command list.
pub type ActionMap = IndexMap<Trigger, Vec<Command>>;

/// Event that gates a list of commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Create,
    Activate,
    Bump,
    Adone,
    End,
}

impl Trigger {
    /// Match a trigger keyword, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Self::Create, Self::Activate, Self::Bump, Self::Adone, Self::End]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(keyword))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Create => "create",
            Trigger::Activate => "activate",
            Trigger::Bump => "bump",
            Trigger::Adone => "adone",
            Trigger::End => "end",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RGB color; every channel is already within 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fully populated coordinate triple used by move, rotate and scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Horizontal position of a teleport or warp destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "coordinateType", rename_all = "lowercase")]
pub enum Coordinates {
    /// North and east are positive; south and west are negated.
    Absolute { ns: f64, ew: f64 },
    /// Offset from the current position.
    Relative { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AltitudeKind {
    Absolute,
    Relative,
}

/// Altitude suffix (`5a`, `+2a`); a leading sign makes it relative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Altitude {
    #[serde(rename = "altitudeType")]
    pub kind: AltitudeKind,
    pub value: f64,
}

/// Coordinates block shared by `teleport` and `warp`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldCoordinates {
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Altitude>,
    /// Heading code, as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<u32>,
}

/// Tag of a [`Command`], without its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Texture,
    Sound,
    Corona,
    Color,
    Examine,
    Solid,
    Name,
    Visible,
    Move,
    Rotate,
    Scale,
    Light,
    Noise,
    Picture,
    Media,
    Sign,
    Teleport,
    Warp,
    Url,
    Invalid,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Texture => "texture",
            CommandKind::Sound => "sound",
            CommandKind::Corona => "corona",
            CommandKind::Color => "color",
            CommandKind::Examine => "examine",
            CommandKind::Solid => "solid",
            CommandKind::Name => "name",
            CommandKind::Visible => "visible",
            CommandKind::Move => "move",
            CommandKind::Rotate => "rotate",
            CommandKind::Scale => "scale",
            CommandKind::Light => "light",
            CommandKind::Noise => "noise",
            CommandKind::Picture => "picture",
            CommandKind::Media => "media",
            CommandKind::Sign => "sign",
            CommandKind::Teleport => "teleport",
            CommandKind::Warp => "warp",
            CommandKind::Url => "url",
            CommandKind::Invalid => "invalid",
        }
    }

    /// Kinds that mean something even without any attribute.
    pub fn kept_when_empty(&self) -> bool {
        matches!(self, CommandKind::Examine | CommandKind::Sign)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single directive with its kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "commandType", rename_all = "lowercase")]
pub enum Command {
    Texture(TextureCommand),
    Sound(SoundCommand),
    Corona(CoronaCommand),
    Color(ColorCommand),
    Examine,
    Solid(SolidCommand),
    Name(NameCommand),
    Visible(VisibleCommand),
    Move(MoveCommand),
    Rotate(RotateCommand),
    Scale(ScaleCommand),
    Light(LightCommand),
    Noise(NoiseCommand),
    Picture(PictureCommand),
    Media(MediaCommand),
    Sign(SignCommand),
    Teleport(TeleportCommand),
    Warp(WarpCommand),
    Url(UrlCommand),
    Invalid(InvalidCommand),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Texture(_) => CommandKind::Texture,
            Command::Sound(_) => CommandKind::Sound,
            Command::Corona(_) => CommandKind::Corona,
            Command::Color(_) => CommandKind::Color,
            Command::Examine => CommandKind::Examine,
            Command::Solid(_) => CommandKind::Solid,
            Command::Name(_) => CommandKind::Name,
            Command::Visible(_) => CommandKind::Visible,
            Command::Move(_) => CommandKind::Move,
            Command::Rotate(_) => CommandKind::Rotate,
            Command::Scale(_) => CommandKind::Scale,
            Command::Light(_) => CommandKind::Light,
            Command::Noise(_) => CommandKind::Noise,
            Command::Picture(_) => CommandKind::Picture,
            Command::Media(_) => CommandKind::Media,
            Command::Sign(_) => CommandKind::Sign,
            Command::Teleport(_) => CommandKind::Teleport,
            Command::Warp(_) => CommandKind::Warp,
            Command::Url(_) => CommandKind::Url,
            Command::Invalid(_) => CommandKind::Invalid,
        }
    }

    /// Object part this command is scoped to, if any.
    pub fn target_name(&self) -> Option<&str> {
        let name = match self {
            Command::Texture(c) => &c.target_name,
            Command::Corona(c) => &c.target_name,
            Command::Color(c) => &c.target_name,
            Command::Solid(c) => &c.target_name,
            Command::Name(c) => &c.target_name,
            Command::Visible(c) => &c.target_name,
            Command::Move(c) => &c.target_name,
            Command::Rotate(c) => &c.target_name,
            Command::Scale(c) => &c.target_name,
            Command::Light(c) => &c.target_name,
            Command::Picture(c) => &c.target_name,
            Command::Media(c) => &c.target_name,
            Command::Sign(c) => &c.target_name,
            Command::Sound(_)
            | Command::Examine
            | Command::Noise(_)
            | Command::Teleport(_)
            | Command::Warp(_)
            | Command::Url(_)
            | Command::Invalid(_) => return None,
        };
        name.as_deref()
    }

    /// True when no attribute beyond the tag is set.
    pub fn is_empty(&self) -> bool {
        match self {
            Command::Texture(c) => {
                c.texture.is_none() && c.mask.is_none() && c.tag.is_none() && c.target_name.is_none()
            },
            Command::Sound(c) => c.resource.is_none(),
            Command::Corona(c) => {
                c.resource.is_none() && c.mask.is_none() && c.size.is_none() && c.target_name.is_none()
            },
            Command::Color(c) => c.color.is_none() && c.tint.is_none() && c.target_name.is_none(),
            Command::Examine => true,
            Command::Solid(c) => c.value.is_none() && c.target_name.is_none(),
            Command::Name(c) => c.target_name.is_none(),
            Command::Visible(c) => c.value.is_none() && c.target_name.is_none(),
            Command::Move(c) => {
                c.distance.is_none()
                    && c.time.is_none()
                    && c.wait.is_none()
                    && c.looping.is_none()
                    && c.reset.is_none()
                    && c.sync.is_none()
                    && c.smooth.is_none()
                    && c.global.is_none()
                    && c.target_name.is_none()
            },
            Command::Rotate(c) => {
                c.speed.is_none()
                    && c.time.is_none()
                    && c.wait.is_none()
                    && c.looping.is_none()
                    && c.reset.is_none()
                    && c.sync.is_none()
                    && c.target_name.is_none()
            },
            Command::Scale(c) => c.factor.is_none() && c.target_name.is_none(),
            Command::Light(c) => {
                c.color.is_none()
                    && c.brightness.is_none()
                    && c.radius.is_none()
                    && c.light_type.is_none()
                    && c.fx.is_none()
                    && c.time.is_none()
                    && c.angle.is_none()
                    && c.pitch.is_none()
                    && c.target_name.is_none()
            },
            Command::Noise(c) => c.resource.is_none(),
            Command::Picture(c) => c.resource.is_none() && c.update.is_none() && c.target_name.is_none(),
            Command::Media(c) => c.resource.is_none() && c.radius.is_none() && c.target_name.is_none(),
            Command::Sign(c) => c.text.is_none() && c.color.is_none() && c.bcolor.is_none() && c.target_name.is_none(),
            Command::Teleport(c) => c.world_name.is_none() && c.coordinates.is_none(),
            Command::Url(c) => c.resource.is_none(),
            Command::Warp(_) | Command::Invalid(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextureCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoronaCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Set when the `tint` keyword was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolidCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NameCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisibleCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoveCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<f64>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotateCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<f64>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LightCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// `point` or `spot`, case as written.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub light_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PictureCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcolor: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeleportCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<WorldCoordinates>,
}

/// Warp destination; the coordinates block is flattened into the command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarpCommand {
    #[serde(flatten)]
    pub position: WorldCoordinates,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

/// Text that matched no known command, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidCommand {
    pub command_text: String,
}
