use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn toggle_sequence_parity_decides_final_theme() {
    for n in 0..32 {
        let theme = (0..n).fold(Theme::default(), |t, _| t.toggled());
        let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
        assert_eq!(theme, expected, "after {n} toggles");
    }
}

#[test]
fn attr_values_match_stylesheet_keys() {
    assert_eq!(Theme::Dark.as_attr(), "dark");
    assert_eq!(Theme::Light.as_attr(), "light");
}

#[test]
fn toggle_icon_points_at_the_other_theme() {
    assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_eq!(Theme::Dark.toggle_title(), "Switch to light theme");
}
