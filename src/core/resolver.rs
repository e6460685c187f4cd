// src/core/resolver.rs — Choose and instantiate the active widget set

use crate::core::profile::ProfileProbe;
use crate::infra::config::Config;
use crate::infra::errors::BarError;
use crate::widgets::registry::WidgetRegistry;
use crate::widgets::types::{Widget, WidgetSpec};

/// Pick the widget specs for the current profile.
///
/// The probe only runs when the config declares profile-specific sets.
/// Returns the matched profile name (if a profile set was chosen) and the
/// specs in declared order.
pub fn select_specs<'a>(
    config: &'a Config,
    probe: &dyn ProfileProbe,
) -> Result<(Option<String>, &'a [WidgetSpec]), BarError> {
    if let Some(ref by_profile) = config.widgets_netctl {
        if let Some(profile) = probe.active_profile()? {
            if let Some(specs) = by_profile.get(&profile) {
                return Ok((Some(profile), specs.as_slice()));
            }
            tracing::debug!("No widget set for profile '{}', using default", profile);
        }
    }
    Ok((None, config.widgets.as_slice()))
}

/// Build the active widget list. Any construction failure aborts the whole
/// resolution.
pub fn resolve(
    config: &Config,
    registry: &WidgetRegistry,
    probe: &dyn ProfileProbe,
) -> Result<Vec<Box<dyn Widget>>, BarError> {
    let (profile, specs) = select_specs(config, probe)?;

    let widgets = specs
        .iter()
        .map(|spec| registry.build(spec))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        "Resolved {} widget(s) ({})",
        widgets.len(),
        profile.as_deref().unwrap_or("default set")
    );
    Ok(widgets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::MockProfileProbe;

    const CONFIG: &str = r#"
widgets:
  - widgets.text.Text: [default-a, a]
  - widgets.text.Text: [default-b, b]
widgets_netctl:
  home-wifi:
    - widgets.text.Text: [home, h]
"#;

    fn probe_returning(profile: Option<&'static str>) -> MockProfileProbe {
        let mut probe = MockProfileProbe::new();
        probe
            .expect_active_profile()
            .times(1)
            .returning(move || Ok(profile.map(String::from)));
        probe
    }

    fn names(widgets: &[Box<dyn Widget>]) -> Vec<String> {
        widgets.iter().map(|w| w.name().to_string()).collect()
    }

    #[test]
    fn test_matching_profile_selects_profile_set() {
        let config = Config::from_yaml(CONFIG).unwrap();
        let (profile, specs) = select_specs(&config, &probe_returning(Some("home-wifi"))).unwrap();
        assert_eq!(profile.as_deref(), Some("home-wifi"));
        assert_eq!(specs, config.widgets_netctl.as_ref().unwrap()["home-wifi"].as_slice());
    }

    #[test]
    fn test_unknown_profile_falls_back_to_default() {
        let config = Config::from_yaml(CONFIG).unwrap();
        let (profile, specs) = select_specs(&config, &probe_returning(Some("office"))).unwrap();
        assert!(profile.is_none());
        assert_eq!(specs, config.widgets.as_slice());
    }

    #[test]
    fn test_no_active_profile_falls_back_to_default() {
        let config = Config::from_yaml(CONFIG).unwrap();
        let widgets = resolve(
            &config,
            &WidgetRegistry::with_builtins(),
            &probe_returning(None),
        )
        .unwrap();
        assert_eq!(names(&widgets), vec!["a", "b"]);
    }

    #[test]
    fn test_probe_not_called_without_profile_sets() {
        let config = Config::from_yaml("widgets: [widgets.clock.Clock]").unwrap();
        let mut probe = MockProfileProbe::new();
        probe.expect_active_profile().times(0);
        let widgets = resolve(&config, &WidgetRegistry::with_builtins(), &probe).unwrap();
        assert_eq!(names(&widgets), vec!["clock"]);
    }

    #[test]
    fn test_probe_failure_propagates() {
        let config = Config::from_yaml(CONFIG).unwrap();
        let mut probe = MockProfileProbe::new();
        probe
            .expect_active_profile()
            .returning(|| Err(BarError::ProfileProbe("netctl exited with 1".into())));
        let err = resolve(&config, &WidgetRegistry::with_builtins(), &probe)
            .err()
            .unwrap();
        assert!(matches!(err, BarError::ProfileProbe(_)));
    }

    #[test]
    fn test_one_bad_spec_fails_whole_resolution() {
        let config = Config::from_yaml(
            "widgets:\n  - widgets.clock.Clock\n  - widgets.missing.Missing\n",
        )
        .unwrap();
        let probe = MockProfileProbe::new();
        let err = resolve(&config, &WidgetRegistry::with_builtins(), &probe).err();
        assert!(matches!(err, Some(BarError::UnknownWidget { .. })));
    }
}
