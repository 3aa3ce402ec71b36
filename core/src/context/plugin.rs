use std::sync::Arc;

use hashbrown::HashSet;
use runecraft_types::CONFIG_GROUP;

use super::{CachedAnimation, Client, Clock, ConfigProvider, Notifier, SystemClock, current_animation};
use crate::events::{ChatMessageType, EventSubscriber, GameState, HostEvent, Item, Npc, SceneObject};
use crate::game_ids::{inventory_id, is_degraded_pouch, npc_id, object_id, varbit_id};
use crate::overlay::{
    ChippingOverlay, DarkMageHighlight, RiftMarker, RunestoneHighlight, RunestoneSide,
};
use crate::rifts::{AbyssRift, enabled_rifts};
use crate::session::{SessionSnapshot, SessionState, SharedSession};
use crate::tracker::{
    ActivityInferencer, ChipObservation, StatTimeout, is_chipping, record_rune_mint,
    sweep_inactive_session,
};

pub const POUCH_DECAYED_MESSAGE: &str = "Your pouch has decayed through use.";
pub const POUCH_DECAYED_NOTIFICATION: &str = "Your rune pouch has decayed.";

/// The Runecraft plugin: routes host events into the session tracker and keeps
/// the scene references the overlays draw.
///
/// All mutation happens through `&mut self` on the host's dispatch thread.
/// The session itself lives in a [`SharedSession`] so overlays on the render
/// thread can read it.
pub struct RunecraftPlugin {
    client: Arc<dyn Client>,
    notifier: Arc<dyn Notifier>,
    config: Arc<dyn ConfigProvider>,
    clock: Arc<dyn Clock>,
    animation: Arc<CachedAnimation>,

    running: bool,
    session: SharedSession,
    inferencer: ActivityInferencer,
    stat_timeout: StatTimeout,

    // Scene tracking
    abyss_objects: HashSet<SceneObject>,
    rifts: HashSet<AbyssRift>,
    degraded_pouch_in_inventory: bool,
    dark_mage: Option<Npc>,
    dense_runestone_south: Option<SceneObject>,
    dense_runestone_north: Option<SceneObject>,
    dense_runestone_south_mineable: bool,
    dense_runestone_north_mineable: bool,
}

impl RunecraftPlugin {
    pub fn new(
        client: Arc<dyn Client>,
        notifier: Arc<dyn Notifier>,
        config: Arc<dyn ConfigProvider>,
    ) -> Self {
        Self {
            client,
            notifier,
            config,
            clock: Arc::new(SystemClock),
            animation: Arc::new(CachedAnimation::default()),
            running: false,
            session: SharedSession::new(),
            inferencer: ActivityInferencer::new(),
            stat_timeout: StatTimeout::default(),
            abyss_objects: HashSet::new(),
            rifts: HashSet::new(),
            degraded_pouch_in_inventory: false,
            dark_mage: None,
            dense_runestone_south: None,
            dense_runestone_north: None,
            dense_runestone_south_mineable: false,
            dense_runestone_north_mineable: false,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // --- Lifecycle ---

    pub fn start_up(&mut self) {
        self.session.install(SessionState::new());
        self.refresh_config();
        self.running = true;
        tracing::info!(
            stat_timeout_mins = self.stat_timeout.minutes(),
            rifts = self.rifts.len(),
            "runecraft plugin started"
        );
    }

    pub fn shut_down(&mut self) {
        self.running = false;
        self.abyss_objects.clear();
        self.dark_mage = None;
        self.dense_runestone_north = None;
        self.dense_runestone_south = None;
        self.degraded_pouch_in_inventory = false;
        self.inferencer.reset();
        self.session.clear();
        tracing::info!("runecraft plugin stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // --- Event routing ---

    fn on_inventory_changed(&mut self, container_id: i32, items: &[Item]) {
        if container_id != inventory_id::INVENTORY {
            return;
        }

        self.degraded_pouch_in_inventory = items.iter().any(|item| is_degraded_pouch(item.id));

        if self.inferencer.observe_inventory(items) != ChipObservation::Chipped {
            return;
        }

        let now = self.clock.now();
        if let Some(total) = self.session.update(|session| {
            session.record_chip(now);
            session.total_chipped()
        }) {
            tracing::debug!(total_chipped = total, "dense essence chipped");
        }
    }

    fn on_chat_message(&mut self, kind: ChatMessageType, message: &str) {
        if kind != ChatMessageType::GameMessage {
            return;
        }

        if self.config.config().degrading_notification && message.contains(POUCH_DECAYED_MESSAGE)
        {
            self.notifier.notify(POUCH_DECAYED_NOTIFICATION);
        }
    }

    fn on_game_object_spawned(&mut self, object: SceneObject) {
        match object.id {
            object_id::DENSE_RUNESTONE_SOUTH => self.dense_runestone_south = Some(object),
            object_id::DENSE_RUNESTONE_NORTH => self.dense_runestone_north = Some(object),
            _ => {}
        }
    }

    fn on_game_object_despawned(&mut self, object: SceneObject) {
        match object.id {
            object_id::DENSE_RUNESTONE_SOUTH => self.dense_runestone_south = None,
            object_id::DENSE_RUNESTONE_NORTH => self.dense_runestone_north = None,
            _ => {}
        }
    }

    fn on_decorative_object_spawned(&mut self, object: SceneObject) {
        if AbyssRift::from_object_id(object.id).is_some() {
            self.abyss_objects.insert(object);
        }
    }

    fn on_decorative_object_despawned(&mut self, object: SceneObject) {
        self.abyss_objects.remove(&object);
    }

    fn on_npc_spawned(&mut self, npc: Npc) {
        if npc.id == npc_id::DARK_MAGE {
            self.dark_mage = Some(npc);
        }
    }

    fn on_npc_despawned(&mut self, npc: Npc) {
        if self.dark_mage == Some(npc) {
            self.dark_mage = None;
        }
    }

    /// Any varbit change re-reads both depletion bits from the client.
    fn on_varbit_changed(&mut self) {
        self.dense_runestone_south_mineable =
            self.client.varbit_value(varbit_id::DENSE_RUNESTONE_SOUTH_DEPLETED) == 0;
        self.dense_runestone_north_mineable =
            self.client.varbit_value(varbit_id::DENSE_RUNESTONE_NORTH_DEPLETED) == 0;
    }

    fn on_game_state_changed(&mut self, state: GameState) {
        match state {
            GameState::Loading => {
                self.abyss_objects.clear();
                self.dense_runestone_north = None;
                self.dense_runestone_south = None;
            }
            GameState::ConnectionLost | GameState::Hopping | GameState::LoginScreen => {
                self.dark_mage = None;
            }
            _ => {}
        }
    }

    fn on_config_changed(&mut self, group: &str) {
        if group == CONFIG_GROUP {
            self.refresh_config();
        }
    }

    fn on_animation_changed(&mut self, animation_id: Option<i32>) {
        self.animation.set(animation_id);
    }

    fn on_rune_minted(&mut self, item_id: i32, quantity: i32) {
        self.session
            .update(|session| record_rune_mint(session, item_id, quantity));
    }

    /// 1 Hz inactivity sweep. Sessions survive while not logged in.
    fn on_tick(&mut self) {
        if self.client.game_state() != GameState::LoggedIn {
            return;
        }

        let now = self.clock.now();
        let timeout = self.stat_timeout;
        self.session
            .update(|session| sweep_inactive_session(session, now, timeout));
    }

    fn refresh_config(&mut self) {
        let config = self.config.config();
        self.rifts = enabled_rifts(&config);
        self.stat_timeout = StatTimeout::from_config(&config);
    }

    // --- Queries ---

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn session_snapshot(&self) -> Option<SessionSnapshot> {
        self.session.snapshot()
    }

    pub fn is_chipping_now(&self) -> bool {
        let Some(snapshot) = self.session.snapshot() else {
            return false;
        };
        let animation = current_animation(self.client.as_ref(), &self.animation);
        is_chipping(animation, snapshot.last_activity_at)
    }

    pub fn stat_timeout(&self) -> StatTimeout {
        self.stat_timeout
    }

    pub fn enabled_rifts(&self) -> &HashSet<AbyssRift> {
        &self.rifts
    }

    pub fn abyss_objects(&self) -> &HashSet<SceneObject> {
        &self.abyss_objects
    }

    pub fn degraded_pouch_in_inventory(&self) -> bool {
        self.degraded_pouch_in_inventory
    }

    pub fn dark_mage(&self) -> Option<Npc> {
        self.dark_mage
    }

    pub fn dense_runestone_south(&self) -> Option<SceneObject> {
        self.dense_runestone_south
    }

    pub fn dense_runestone_north(&self) -> Option<SceneObject> {
        self.dense_runestone_north
    }

    pub fn dense_runestone_south_mineable(&self) -> bool {
        self.dense_runestone_south_mineable
    }

    pub fn dense_runestone_north_mineable(&self) -> bool {
        self.dense_runestone_north_mineable
    }

    /// Tracked rift decorations whose kind is enabled for rendering.
    pub fn rift_markers(&self) -> Vec<RiftMarker> {
        self.abyss_objects
            .iter()
            .filter_map(|object| {
                let rift = AbyssRift::from_object_id(object.id)?;
                self.rifts.contains(&rift).then_some(RiftMarker {
                    rift,
                    object: *object,
                    icon_item_id: rift.rune_item_id(),
                })
            })
            .collect()
    }

    pub fn runestone_highlights(&self) -> Vec<RunestoneHighlight> {
        let north = self.dense_runestone_north.map(|object| RunestoneHighlight {
            side: RunestoneSide::North,
            object,
            mineable: self.dense_runestone_north_mineable,
        });
        let south = self.dense_runestone_south.map(|object| RunestoneHighlight {
            side: RunestoneSide::South,
            object,
            mineable: self.dense_runestone_south_mineable,
        });
        north.into_iter().chain(south).collect()
    }

    pub fn dark_mage_highlight(&self) -> Option<DarkMageHighlight> {
        if !self.degraded_pouch_in_inventory {
            return None;
        }
        self.dark_mage.map(|npc| DarkMageHighlight { npc })
    }

    /// Session panel overlay sharing this plugin's session and collaborators.
    pub fn chipping_overlay(&self) -> ChippingOverlay {
        ChippingOverlay::new(
            self.session.clone(),
            Arc::clone(&self.client),
            Arc::clone(&self.config),
            Arc::clone(&self.animation),
        )
    }
}

impl EventSubscriber for RunecraftPlugin {
    fn handle_event(&mut self, event: &HostEvent) {
        if !self.running {
            tracing::trace!(kind = event.kind(), "plugin stopped, dropping event");
            return;
        }

        match event {
            HostEvent::InventoryChanged {
                container_id,
                items,
            } => self.on_inventory_changed(*container_id, items),
            HostEvent::ChatMessage { kind, message } => self.on_chat_message(*kind, message),
            HostEvent::GameObjectSpawned { object } => self.on_game_object_spawned(*object),
            HostEvent::GameObjectDespawned { object } => self.on_game_object_despawned(*object),
            HostEvent::DecorativeObjectSpawned { object } => {
                self.on_decorative_object_spawned(*object)
            }
            HostEvent::DecorativeObjectDespawned { object } => {
                self.on_decorative_object_despawned(*object)
            }
            HostEvent::NpcSpawned { npc } => self.on_npc_spawned(*npc),
            HostEvent::NpcDespawned { npc } => self.on_npc_despawned(*npc),
            HostEvent::VarbitChanged { .. } => self.on_varbit_changed(),
            HostEvent::GameStateChanged { state } => self.on_game_state_changed(*state),
            HostEvent::ConfigChanged { group } => self.on_config_changed(group),
            HostEvent::AnimationChanged { animation_id } => {
                self.on_animation_changed(*animation_id)
            }
            HostEvent::RuneMinted { item_id, quantity } => {
                self.on_rune_minted(*item_id, *quantity)
            }
            HostEvent::Tick => self.on_tick(),
        }
    }
}
