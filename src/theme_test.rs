use super::*;

use crate::page::FakePage;
use crate::prefs::MemoryPrefs;

// --- Parsing and canonical values ---

#[test]
fn as_str_is_canonical() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn from_attr_reads_dark() {
    assert_eq!(Theme::from_attr(Some("dark")), Theme::Dark);
}

#[test]
fn from_attr_reads_light() {
    assert_eq!(Theme::from_attr(Some("light")), Theme::Light);
}

#[test]
fn from_attr_absent_defaults_to_light() {
    assert_eq!(Theme::from_attr(None), Theme::Light);
}

#[test]
fn from_attr_tolerates_foreign_values() {
    assert_eq!(Theme::from_attr(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_attr(Some("")), Theme::Light);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// --- flipped ---

#[test]
fn flipped_swaps_variants() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn flipped_twice_is_identity() {
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

// --- Icon mapping ---

#[test]
fn light_theme_shows_moon_without_accent() {
    assert_eq!(Theme::Light.icon_class(), MOON_ICON_CLASS);
    assert_eq!(Theme::Light.icon_accent(), None);
}

#[test]
fn dark_theme_shows_sun_with_accent() {
    assert_eq!(Theme::Dark.icon_class(), SUN_ICON_CLASS);
    assert_eq!(Theme::Dark.icon_accent(), Some(SUN_ACCENT_COLOR));
}

// --- stored_theme ---

#[test]
fn stored_theme_defaults_to_light_on_an_empty_store() {
    let prefs = MemoryPrefs::new();
    assert_eq!(stored_theme(&prefs), Theme::Light);
}

#[test]
fn stored_theme_reads_a_persisted_dark() {
    let prefs = MemoryPrefs::new();
    prefs.set(THEME_STORAGE_KEY, "dark");
    assert_eq!(stored_theme(&prefs), Theme::Dark);
}

#[test]
fn stored_theme_tolerates_foreign_values() {
    let prefs = MemoryPrefs::new();
    prefs.set(THEME_STORAGE_KEY, "midnight");
    assert_eq!(stored_theme(&prefs), Theme::Light);
}

// --- initialize ---

#[test]
fn initialize_applies_light_by_default() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();

    initialize(&page, &prefs);

    assert_eq!(page.root_theme().as_deref(), Some("light"));
    assert_eq!(page.body_theme().as_deref(), Some("light"));
    assert_eq!(page.icon_class().as_deref(), Some(MOON_ICON_CLASS));
    assert_eq!(page.icon_color(), None);
}

#[test]
fn initialize_applies_a_stored_dark() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();
    prefs.set(THEME_STORAGE_KEY, "dark");

    initialize(&page, &prefs);

    assert_eq!(page.root_theme().as_deref(), Some("dark"));
    assert_eq!(page.body_theme().as_deref(), Some("dark"));
    assert_eq!(page.icon_class().as_deref(), Some(SUN_ICON_CLASS));
    assert_eq!(page.icon_color().as_deref(), Some(SUN_ACCENT_COLOR));
}

#[test]
fn initialize_does_not_write_the_store() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();

    initialize(&page, &prefs);

    assert_eq!(prefs.get(THEME_STORAGE_KEY), None);
}

// --- toggle ---

#[test]
fn toggle_flips_light_to_dark() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();
    initialize(&page, &prefs);

    let applied = toggle(&page, &prefs);

    assert_eq!(applied, Theme::Dark);
    assert_eq!(page.root_theme().as_deref(), Some("dark"));
    assert_eq!(page.body_theme().as_deref(), Some("dark"));
    assert_eq!(prefs.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(page.icon_class().as_deref(), Some(SUN_ICON_CLASS));
    assert_eq!(page.icon_color().as_deref(), Some(SUN_ACCENT_COLOR));
}

#[test]
fn toggle_flips_dark_back_to_light() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();
    prefs.set(THEME_STORAGE_KEY, "dark");
    initialize(&page, &prefs);

    let applied = toggle(&page, &prefs);

    assert_eq!(applied, Theme::Light);
    assert_eq!(page.root_theme().as_deref(), Some("light"));
    assert_eq!(prefs.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(page.icon_class().as_deref(), Some(MOON_ICON_CLASS));
    assert_eq!(page.icon_color(), None);
}

#[test]
fn toggle_twice_returns_to_the_start() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();
    initialize(&page, &prefs);

    toggle(&page, &prefs);
    toggle(&page, &prefs);

    assert_eq!(page.root_theme().as_deref(), Some("light"));
    assert_eq!(prefs.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_reads_the_page_not_the_store() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();
    prefs.set(THEME_STORAGE_KEY, "dark");
    page.set_root_attr("light");

    // The attribute says light, so the toggle lands on dark even though
    // the store already claimed dark.
    assert_eq!(toggle(&page, &prefs), Theme::Dark);
}

#[test]
fn toggle_normalizes_a_foreign_attribute_value() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();
    page.set_root_attr("sepia");

    let applied = toggle(&page, &prefs);

    assert_eq!(applied, Theme::Dark);
    assert_eq!(page.root_theme().as_deref(), Some("dark"));
    assert_eq!(prefs.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn store_and_page_agree_after_each_toggle() {
    let page = FakePage::new();
    let prefs = MemoryPrefs::new();
    initialize(&page, &prefs);

    for _ in 0..4 {
        toggle(&page, &prefs);
        assert_eq!(page.root_theme(), prefs.get(THEME_STORAGE_KEY));
        assert_eq!(page.root_theme(), page.body_theme());
    }
}
