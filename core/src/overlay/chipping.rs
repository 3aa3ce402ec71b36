use std::sync::Arc;

use runecraft_types::Color;

use super::{PanelComponent, TitleComponent};
use crate::context::{CachedAnimation, Client, ConfigProvider, current_animation};
use crate::session::SharedSession;
use crate::tracker::is_chipping;

/// Session panel showing whether the player is chipping right now.
///
/// Read-only: it takes a snapshot of the session under the read lock each
/// frame and never mutates tracker state.
pub struct ChippingOverlay {
    session: SharedSession,
    client: Arc<dyn Client>,
    config: Arc<dyn ConfigProvider>,
    animation: Arc<CachedAnimation>,
    panel: PanelComponent,
}

impl ChippingOverlay {
    pub fn new(
        session: SharedSession,
        client: Arc<dyn Client>,
        config: Arc<dyn ConfigProvider>,
        animation: Arc<CachedAnimation>,
    ) -> Self {
        Self {
            session,
            client,
            config,
            animation,
            panel: PanelComponent::default(),
        }
    }

    pub fn render(&mut self) -> &PanelComponent {
        self.panel.clear();

        let Some(snapshot) = self.session.snapshot() else {
            return &self.panel;
        };
        if !snapshot.is_active() || !self.config.config().show_chipping_state {
            return &self.panel;
        }

        let animation = current_animation(self.client.as_ref(), &self.animation);
        let title = if is_chipping(animation, snapshot.last_activity_at) {
            TitleComponent::new("Chipping", Color::GREEN)
        } else {
            TitleComponent::new("NOT chipping", Color::RED)
        };
        self.panel.push(title);

        &self.panel
    }

    /// Panel from the most recent render.
    pub fn panel(&self) -> &PanelComponent {
        &self.panel
    }
}
