use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDateTime};
use runecraft_core::context::{ManualClock, SharedConfig};
use runecraft_core::overlay::ChippingOverlay;
use runecraft_core::{EventBus, HostEvent, RunecraftPlugin, SessionSnapshot};
use runecraft_types::CONFIG_GROUP;

use crate::host::{LogNotifier, ReplayClient};
use crate::script::Script;

/// What the plugin looked like after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub index: usize,
    pub event: Option<&'static str>,
    pub at: NaiveDateTime,
    pub session: Option<SessionSnapshot>,
    pub panel: Vec<String>,
    pub notifications: Vec<String>,
}

pub fn run_script(script: &Script, start: NaiveDateTime) -> Vec<StepReport> {
    let client = Arc::new(ReplayClient::default());
    let notifier = Arc::new(LogNotifier::default());
    let config = Arc::new(SharedConfig::new(script.config.clone()));
    let clock = Arc::new(ManualClock::new(start));

    let mut plugin = RunecraftPlugin::new(client.clone(), notifier.clone(), config.clone())
        .with_clock(clock.clone());
    plugin.start_up();
    let mut overlay = plugin.chipping_overlay();
    let plugin = Arc::new(Mutex::new(plugin));

    let mut bus = EventBus::new();
    bus.subscribe(Box::new(Arc::clone(&plugin)));

    let mut now = start;
    let mut reports = Vec::with_capacity(script.steps.len());

    for (index, step) in script.steps.iter().enumerate() {
        if step.advance_secs != 0 {
            let by = Duration::seconds(step.advance_secs);
            clock.advance(by);
            now += by;
        }

        if let Some(new_config) = &step.config {
            config.set(new_config.clone());
            bus.post(&HostEvent::ConfigChanged {
                group: CONFIG_GROUP.to_string(),
            });
        }

        if let Some(event) = &step.event {
            client.observe(event);
            bus.post(event);
        }

        let session = plugin
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .session_snapshot();
        let panel = render_lines(&mut overlay);

        tracing::debug!(step = index, ?session, "step applied");
        reports.push(StepReport {
            index,
            event: step.event.as_ref().map(HostEvent::kind),
            at: now,
            session,
            panel,
            notifications: notifier.drain(),
        });
    }

    plugin.lock().unwrap_or_else(|p| p.into_inner()).shut_down();
    reports
}

fn render_lines(overlay: &mut ChippingOverlay) -> Vec<String> {
    overlay
        .render()
        .children()
        .iter()
        .map(|title| title.text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use chrono::NaiveDate;
    use std::path::Path;

    const CHIPPING_SESSION: &str = include_str!("../scripts/chipping_session.toml");

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_bundled_script_replays() {
        let script = parse_script(CHIPPING_SESSION, Path::new("chipping_session.toml")).unwrap();
        let reports = run_script(&script, start());
        assert_eq!(reports.len(), script.steps.len());

        let peak = reports
            .iter()
            .filter_map(|r| r.session.map(|s| s.total_chipped))
            .max()
            .unwrap();
        assert_eq!(peak, 3);

        assert!(reports.iter().any(|r| r.panel == vec!["Chipping".to_string()]));
        assert!(reports.iter().any(|r| r.panel == vec!["NOT chipping".to_string()]));
        assert!(
            reports
                .iter()
                .any(|r| r.notifications == vec!["Your rune pouch has decayed.".to_string()])
        );

        let last = reports.last().unwrap();
        assert_eq!(last.session.unwrap().total_chipped, 0);
        assert!(last.panel.is_empty());
    }
}
