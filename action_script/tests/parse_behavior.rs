use aw_action_data::{Color, ColorCommand, Command, NameCommand, Vec3};
use aw_action_script::{ActionMap, Trigger, explain_failure, parse, parse_raw};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn color(r: u8, g: u8, b: u8) -> Command {
    Command::Color(ColorCommand { color: Some(Color::new(r, g, b)), ..Default::default() })
}

fn commands<'a>(map: &'a ActionMap, trigger: Trigger) -> &'a [Command] {
    map.get(&trigger).map(Vec::as_slice).unwrap_or_default()
}

#[test]
fn empty_and_unmatched_input_give_empty_map() {
    init_logging();
    assert!(parse("").is_empty());
    assert!(parse("foobar").is_empty());
    assert!(!parse("create color red; bump").is_empty());
}

#[test]
fn diagnostics_only_for_unmatched_input() {
    init_logging();
    assert!(!explain_failure("foobar").is_empty());
    assert_eq!(explain_failure("create color green;"), "");
    for src in ["", "create color green;", "foobar", "create; ;", "bump warp 1 2", "end ,,"] {
        assert_eq!(explain_failure(src).is_empty(), parse_raw(src).is_ok(), "input {src:?}");
    }
}

#[test]
fn create_color_green() {
    init_logging();
    let map = parse("create color green");
    assert_eq!(map.len(), 1);
    assert_eq!(commands(&map, Trigger::Create), &[color(0, 255, 0)]);
}

#[test]
fn whitespace_and_semicolons_do_not_matter() {
    init_logging();
    let map = parse("create   color        abcdef;;;;;;");
    assert_eq!(commands(&map, Trigger::Create), &[color(171, 205, 239)]);
}

#[test]
fn last_color_applies() {
    init_logging();
    let map = parse("create color green, color red, color blue");
    assert_eq!(commands(&map, Trigger::Create), &[color(0, 0, 255)]);
}

#[test]
fn last_name_applies() {
    init_logging();
    let map = parse("create name foo, name bar, name baz");
    let expected = Command::Name(NameCommand { target_name: Some("baz".into()) });
    assert_eq!(commands(&map, Trigger::Create), &[expected]);
}

#[test]
fn first_action_per_trigger_applies() {
    init_logging();
    let map = parse("create color green; create color red");
    assert_eq!(commands(&map, Trigger::Create), &[color(0, 255, 0)]);
}

#[test]
fn triggers_keep_order_of_first_appearance() {
    init_logging();
    let map = parse("bump examine; end examine; create examine; activate examine; adone examine");
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec![Trigger::Bump, Trigger::End, Trigger::Create, Trigger::Activate, Trigger::Adone]);
}

#[test]
fn rotate_without_speed_is_dropped() {
    init_logging();
    assert!(parse("create rotate").is_empty());
    assert!(!parse("create rotate loop").is_empty());
}

#[test]
fn rotate_speed_arity() {
    init_logging();
    let speed = |src: &str| match parse(src).get(&Trigger::Create).and_then(|c| c.first()).cloned() {
        Some(Command::Rotate(r)) => r.speed,
        other => panic!("expected rotate for {src:?}, got {other:?}"),
    };
    assert_eq!(speed("create rotate 5"), Some(Vec3::new(0.0, 5.0, 0.0)));
    assert_eq!(speed("create rotate 1 2"), Some(Vec3::new(1.0, 2.0, 0.0)));
    assert_eq!(speed("create rotate 1 -2 3.5"), Some(Vec3::new(1.0, -2.0, 3.5)));
}

#[test]
fn scale_factors_are_clamped() {
    init_logging();
    match commands(&parse("create scale 10"), Trigger::Create) {
        [Command::Scale(s)] => assert_eq!(s.factor, Some(Vec3::new(5.0, 5.0, 5.0))),
        other => panic!("expected scale, got {other:?}"),
    }
    match commands(&parse("create scale 0 0.01 3"), Trigger::Create) {
        [Command::Scale(s)] => assert_eq!(s.factor, Some(Vec3::new(1.0, 0.2, 3.0))),
        other => panic!("expected scale, got {other:?}"),
    }
}

#[test]
fn oversized_hex_color_is_white() {
    init_logging();
    let map = parse("create color 10000000000000000");
    assert_eq!(commands(&map, Trigger::Create), &[color(255, 255, 255)]);
}

#[test]
fn examine_survives_without_attributes() {
    init_logging();
    assert_eq!(commands(&parse("activate examine"), Trigger::Activate), &[Command::Examine]);
}

#[test]
fn commands_are_scoped_by_target() {
    init_logging();
    let map = parse("create visible off, visible door on, visible off name=door, visible on");
    match commands(&map, Trigger::Create) {
        [Command::Visible(all), Command::Visible(door)] => {
            assert_eq!((all.value, all.target_name.as_deref()), (Some(true), None));
            assert_eq!((door.value, door.target_name.as_deref()), (Some(false), Some("door")));
        },
        other => panic!("expected two visible commands, got {other:?}"),
    }
}

#[test]
fn duplicate_attribute_discards_only_that_command() {
    init_logging();
    let map = parse("create color red, color green blue");
    assert_eq!(commands(&map, Trigger::Create), &[color(255, 0, 0)]);
}

#[test]
fn end_trigger_is_accepted() {
    init_logging();
    assert_eq!(commands(&parse("END examine"), Trigger::End), &[Command::Examine]);
}

#[test]
fn control_characters_are_ignored() {
    init_logging();
    assert_eq!(parse("create\u{7f} color\u{80} green"), parse("create color green"));
}

#[test]
fn garbage_never_panics() {
    init_logging();
    let inputs = [
        "create sign \"unterminated",
        "create ;;;, ,,; bump",
        "activate teleport 1N",
        "create move time=",
        "create ☃ ☃ ☃",
        "\u{7f}\u{80}",
        "create color=red",
        "adone light type=laser",
        "bump warp +1",
        "create picture update=1 update=2",
    ];
    for src in inputs {
        let _ = parse(src);
        let _ = explain_failure(src);
    }
}

#[test]
fn commands_without_attributes_are_elided() {
    init_logging();
    assert!(parse("create url").is_empty());
    assert!(parse("create teleport").is_empty());
    assert!(parse("create url, teleport, sound, noise").is_empty());
}

#[test]
fn leftover_text_after_a_command_rejects_the_string() {
    init_logging();
    for src in ["create rotate 1 2 3 4x", "create color red !", "create name foo bar"] {
        assert!(parse(src).is_empty(), "input {src:?}");
        assert!(!explain_failure(src).is_empty(), "input {src:?}");
    }
}

#[test]
fn long_coordinate_lists_resolve_by_count() {
    init_logging();
    match commands(&parse("create rotate 1 2 3 4"), Trigger::Create) {
        [Command::Rotate(r)] => assert_eq!(r.speed, Some(Vec3::new(0.0, 0.0, 0.0))),
        other => panic!("expected rotate, got {other:?}"),
    }
    match commands(&parse("create scale 1 2 3 4"), Trigger::Create) {
        [Command::Scale(s)] => assert_eq!(s.factor, Some(Vec3::new(1.0, 2.0, 3.0))),
        other => panic!("expected scale, got {other:?}"),
    }
}

#[test]
fn uppercase_boolean_is_a_second_target() {
    init_logging();
    assert!(parse("activate visible door OFF").is_empty());
    let map = parse("activate visible door OFF, visible door off");
    match commands(&map, Trigger::Activate) {
        [Command::Visible(v)] => assert_eq!((v.value, v.target_name.as_deref()), (Some(false), Some("door"))),
        other => panic!("expected one visible command, got {other:?}"),
    }
}
