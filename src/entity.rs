//! Entity system for characters, spawns, status effects, and the
//! definition/instance pairs driven by the bytecode scripts.

use crate::math::Fixed;
use alloc::vec::Vec;

pub type EntityId = u8;
pub type CharacterId = u8;
pub type SpawnLookupId = u8;
pub type ActionId = u8;
pub type ConditionId = u8;
pub type ActionInstanceId = u8;
pub type ConditionInstanceId = u8;
pub type StatusEffectId = u8;
pub type StatusEffectInstanceId = u8;

/// Number of armor/elemental resistance slots a character carries.
pub const ARMOR_SLOTS: usize = 9;

/// Base entity properties shared by characters and spawn instances.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EntityCore {
    pub id: EntityId,
    pub group: u8,
    pub pos: (Fixed, Fixed),
    pub vel: (Fixed, Fixed),
    pub size: (u8, u8),
    pub collision: (bool, bool, bool, bool), // top, right, bottom, left
    /// facing (binary: 0=left,1=right), gravity_dir (ternary: 0=up,1=none,2=down)
    pub dir: (u8, u8),
    pub enmity: u8,
    pub target_id: Option<u8>,
    pub target_type: u8,
}

impl EntityCore {
    pub fn new(id: EntityId, group: u8) -> Self {
        Self {
            id,
            group,
            pos: (Fixed::ZERO, Fixed::ZERO),
            vel: (Fixed::ZERO, Fixed::ZERO),
            size: (16, 16),
            collision: (true, true, true, true),
            dir: (1, 2),
            enmity: 0,
            target_id: None,
            target_type: 0,
        }
    }

    pub fn get_facing(&self) -> Fixed {
        if self.dir.0 == 0 {
            Fixed::from_int(-1)
        } else {
            Fixed::from_int(1)
        }
    }

    pub fn set_facing(&mut self, facing: Fixed) {
        self.dir.0 = if facing < Fixed::ZERO { 0 } else { 1 };
    }

    /// Gravity multiplier: `dir.1` is genuinely ternary (0=up, 1=none,
    /// 2=down), unlike the binary `dir.0` facing.
    pub fn get_gravity_dir(&self) -> Fixed {
        match self.dir.1 {
            0 => Fixed::from_int(-1),
            1 => Fixed::ZERO,
            _ => Fixed::from_int(1),
        }
    }

    pub fn set_gravity_dir(&mut self, gravity_dir: Fixed) {
        self.dir.1 = if gravity_dir < Fixed::ZERO {
            0
        } else if gravity_dir == Fixed::ZERO {
            1
        } else {
            2
        };
    }
}

/// Programmable fighting character.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Character {
    pub core: EntityCore,
    pub health: u16,
    pub health_cap: u16,
    pub energy: u8,
    pub energy_cap: u8,
    pub energy_regen: u8,
    pub energy_regen_rate: u8,
    pub energy_charge: u8,
    pub energy_charge_rate: u8,
    pub power: u8,
    pub weight: u8,
    pub armor: [u8; ARMOR_SLOTS],
    pub jump_force: Fixed,
    pub move_speed: Fixed,
    pub behaviors: Vec<(ConditionId, ActionId)>,
    pub locked_action: Option<ActionId>,
    pub status_effects: Vec<StatusEffectInstanceId>,
    pub action_last_used: Vec<u16>,
}

impl Character {
    pub fn new(id: CharacterId, group: u8) -> Self {
        Self {
            core: EntityCore::new(id, group),
            health: 100,
            health_cap: 100,
            energy: 100,
            energy_cap: 100,
            energy_regen: 0,
            energy_regen_rate: 0,
            energy_charge: 0,
            energy_charge_rate: 0,
            power: 0,
            weight: 100,
            armor: [100; ARMOR_SLOTS],
            jump_force: Fixed::from_int(5),
            move_speed: Fixed::from_int(3),
            behaviors: Vec::new(),
            locked_action: None,
            status_effects: Vec::new(),
            action_last_used: Vec::new(),
        }
    }

    /// Size the per-action cooldown tracker to the action definition table,
    /// marking every action as never-used.
    pub fn init_action_cooldowns(&mut self, action_count: usize) {
        self.action_last_used = alloc::vec![u16::MAX; action_count];
    }

    pub fn get_armor(&self, element: Element) -> u8 {
        self.armor[element as usize]
    }

    pub fn set_armor(&mut self, element: Element, value: u8) {
        self.armor[element as usize] = value;
    }
}

/// Definition template for a scheduled action.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ActionDefinition {
    pub energy_cost: u8,
    pub cooldown: u16,
    pub args: [u8; 8],
    pub spawns: [u8; 4],
    pub script: Vec<u8>,
}

impl ActionDefinition {
    pub fn new(energy_cost: u8, cooldown: u16, script: Vec<u8>) -> Self {
        Self {
            energy_cost,
            cooldown,
            args: [0; 8],
            spawns: [0; 4],
            script,
        }
    }

    pub fn create_instance(&self, definition_id: ActionId) -> ActionInstance {
        ActionInstance::new(definition_id)
    }

    /// Basic integrity check run once at game-state construction, before any
    /// script executes. Catches malformed definitions early rather than
    /// surfacing as a confusing script failure mid-game.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.script.is_empty() {
            return Err("action script is empty");
        }
        if self.script.len() > crate::core::MAX_SCRIPT_LENGTH {
            return Err("action script exceeds MAX_SCRIPT_LENGTH");
        }
        Ok(())
    }
}

/// Runtime instance of an action in progress.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ActionInstance {
    pub definition_id: ActionId,
    pub cooldown: u16,
    pub last_used_frame: u16,
    pub runtime_vars: [u8; 4],
    pub runtime_fixed: [Fixed; 4],
}

impl ActionInstance {
    pub fn new(definition_id: ActionId) -> Self {
        Self {
            definition_id,
            cooldown: 0,
            last_used_frame: u16::MAX,
            runtime_vars: [0; 4],
            runtime_fixed: [Fixed::ZERO; 4],
        }
    }

    pub fn is_active(&self) -> bool {
        self.cooldown > 0
    }
}

/// Definition template for a behavior-gating condition.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ConditionDefinition {
    pub energy_mul: Fixed,
    pub args: [u8; 8],
    pub spawns: [u8; 4],
    pub script: Vec<u8>,
}

impl ConditionDefinition {
    pub fn new(energy_mul: Fixed, script: Vec<u8>) -> Self {
        Self {
            energy_mul,
            args: [0; 8],
            spawns: [0; 4],
            script,
        }
    }

    pub fn create_instance(&self, definition_id: ConditionId) -> ConditionInstance {
        ConditionInstance::new(definition_id)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.script.is_empty() {
            return Err("condition script is empty");
        }
        if self.script.len() > crate::core::MAX_SCRIPT_LENGTH {
            return Err("condition script exceeds MAX_SCRIPT_LENGTH");
        }
        Ok(())
    }
}

/// Runtime instance of a condition evaluation.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ConditionInstance {
    pub definition_id: ConditionId,
    pub runtime_vars: [u8; 4],
    pub runtime_fixed: [Fixed; 4],
}

impl ConditionInstance {
    pub fn new(definition_id: ConditionId) -> Self {
        Self {
            definition_id,
            runtime_vars: [0; 4],
            runtime_fixed: [Fixed::ZERO; 4],
        }
    }
}

/// Definition template for a status effect.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct StatusEffectDefinition {
    pub duration: u16,
    pub stack_limit: u8,
    pub reset_on_stack: bool,
    pub args: [u8; 8],
    pub spawns: [u8; 4],
    pub on_script: Vec<u8>,
    pub tick_script: Vec<u8>,
    pub off_script: Vec<u8>,
}

impl StatusEffectDefinition {
    pub fn new(
        duration: u16,
        stack_limit: u8,
        reset_on_stack: bool,
        on_script: Vec<u8>,
        tick_script: Vec<u8>,
        off_script: Vec<u8>,
    ) -> Self {
        Self {
            duration,
            stack_limit,
            reset_on_stack,
            args: [0; 8],
            spawns: [0; 4],
            on_script,
            tick_script,
            off_script,
        }
    }

    pub fn create_instance(&self, definition_id: StatusEffectId) -> StatusEffectInstance {
        let mut instance = StatusEffectInstance::new(definition_id);
        instance.remaining_duration = self.duration;
        instance
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.stack_limit == 0 {
            return Err("status effect stack_limit must be at least 1");
        }
        if self.on_script.is_empty() && self.tick_script.is_empty() && self.off_script.is_empty() {
            return Err("status effect has no scripts");
        }
        Ok(())
    }
}

/// Active status effect instance attached to a character.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct StatusEffectInstance {
    pub definition_id: StatusEffectId,
    pub remaining_duration: u16,
    pub stack_count: u8,
    pub vars: [u8; 4],
    pub fixed: [Fixed; 4],
}

impl StatusEffectInstance {
    pub fn new(definition_id: StatusEffectId) -> Self {
        Self {
            definition_id,
            remaining_duration: 0,
            stack_count: 1,
            vars: [0; 4],
            fixed: [Fixed::ZERO; 4],
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_duration == 0
    }
}

/// Definition template for a spawned projectile/object.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SpawnDefinition {
    pub damage_base: u16,
    pub damage_range: u16,
    pub crit_chance: u8,
    pub crit_multiplier: u8,
    pub health_cap: u8,
    pub duration: u16,
    pub element: Option<Element>,
    pub chance: u8,
    pub args: [u8; 8],
    pub spawns: [u8; 4],
    pub behavior_script: Vec<u8>,
    pub collision_script: Vec<u8>,
    pub despawn_script: Vec<u8>,
}

/// Projectile or temporary object spawned by an action or status effect.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SpawnInstance {
    pub core: EntityCore,
    pub spawn_id: SpawnLookupId,
    pub owner_id: EntityId,
    pub owner_type: u8, // 1 = character owner, 2 = spawn owner
    pub element: Element,
    pub health: u16,
    pub health_cap: u16,
    pub rotation: Fixed,
    pub life_span: u16,
    pub runtime_vars: [u8; 4],
    pub runtime_fixed: [Fixed; 4],
}

impl SpawnInstance {
    pub fn new(spawn_id: SpawnLookupId, owner_id: EntityId, pos: (Fixed, Fixed)) -> Self {
        let mut core = EntityCore::new(0, 0); // id assigned once inserted into game state
        core.pos = pos;

        Self {
            core,
            spawn_id,
            owner_id,
            owner_type: 1,
            element: Element::Punct,
            health: 1,
            health_cap: 1,
            rotation: Fixed::ZERO,
            life_span: 0,
            runtime_vars: [0; 4],
            runtime_fixed: [Fixed::ZERO; 4],
        }
    }

    pub fn with_element(
        spawn_id: SpawnLookupId,
        owner_id: EntityId,
        pos: (Fixed, Fixed),
        element: Element,
    ) -> Self {
        let mut instance = Self::new(spawn_id, owner_id, pos);
        instance.element = element;
        instance
    }
}

/// Damage element, doubling as the index into `Character::armor`.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Punct = 0,
    Blast = 1,
    Force = 2,
    Sever = 3,
    Heat = 4,
    Cryo = 5,
    Jolt = 6,
    Acid = 7,
    Virus = 8,
}

impl Element {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Element::Punct),
            1 => Some(Element::Blast),
            2 => Some(Element::Force),
            3 => Some(Element::Sever),
            4 => Some(Element::Heat),
            5 => Some(Element::Cryo),
            6 => Some(Element::Jolt),
            7 => Some(Element::Acid),
            8 => Some(Element::Virus),
            _ => None,
        }
    }
}
