use serde::{Deserialize, Serialize};

/// One inventory slot as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub quantity: i32,
}

impl Item {
    pub const fn new(id: i32, quantity: i32) -> Self {
        Self { id, quantity }
    }
}

/// A game or decorative object instance in the scene.
///
/// `handle` is the host's identity for the instance; two spawns of the same
/// object id at different tiles have different handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: i32,
    pub handle: u64,
}

/// An NPC instance. `index` is the host's slot for the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Npc {
    pub id: i32,
    pub index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    Unknown,
    Starting,
    LoginScreen,
    LoginScreenAuthenticator,
    LoggingIn,
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMessageType {
    GameMessage,
    Public,
    PrivateMessage,
    Broadcast,
    #[serde(other)]
    Other,
}

/// Events delivered by the host client.
///
/// The host's event bus is external; this enum is the contract the plugin
/// consumes from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    InventoryChanged {
        container_id: i32,
        items: Vec<Item>,
    },
    ChatMessage {
        kind: ChatMessageType,
        message: String,
    },

    GameObjectSpawned {
        object: SceneObject,
    },
    GameObjectDespawned {
        object: SceneObject,
    },
    DecorativeObjectSpawned {
        object: SceneObject,
    },
    DecorativeObjectDespawned {
        object: SceneObject,
    },
    NpcSpawned {
        npc: Npc,
    },
    NpcDespawned {
        npc: Npc,
    },

    VarbitChanged {
        varbit_id: i32,
        value: i32,
    },
    GameStateChanged {
        state: GameState,
    },
    ConfigChanged {
        group: String,
    },

    /// Only needed when the host has no synchronous animation accessor.
    AnimationChanged {
        animation_id: Option<i32>,
    },
    RuneMinted {
        item_id: i32,
        quantity: i32,
    },

    /// 1 Hz scheduler tick
    Tick,
}

impl HostEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InventoryChanged { .. } => "inventory_changed",
            Self::ChatMessage { .. } => "chat_message",
            Self::GameObjectSpawned { .. } => "game_object_spawned",
            Self::GameObjectDespawned { .. } => "game_object_despawned",
            Self::DecorativeObjectSpawned { .. } => "decorative_object_spawned",
            Self::DecorativeObjectDespawned { .. } => "decorative_object_despawned",
            Self::NpcSpawned { .. } => "npc_spawned",
            Self::NpcDespawned { .. } => "npc_despawned",
            Self::VarbitChanged { .. } => "varbit_changed",
            Self::GameStateChanged { .. } => "game_state_changed",
            Self::ConfigChanged { .. } => "config_changed",
            Self::AnimationChanged { .. } => "animation_changed",
            Self::RuneMinted { .. } => "rune_minted",
            Self::Tick => "tick",
        }
    }
}
