//! Class-name helpers for state-dependent styling.

#[cfg(test)]
#[path = "css_test.rs"]
mod css_test;

/// `base` plus ` active` when `active` is set.
#[must_use]
pub fn active_class(base: &str, active: bool) -> String {
    modifier_class(base, active.then_some("active"))
}

/// `base` followed by an optional space-separated modifier.
#[must_use]
pub fn modifier_class(base: &str, modifier: Option<&str>) -> String {
    match modifier {
        Some(m) if !m.is_empty() => format!("{base} {m}"),
        _ => base.to_owned(),
    }
}
