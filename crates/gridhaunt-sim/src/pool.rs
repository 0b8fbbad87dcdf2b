//! AgentPool: the live agents of one kind.
//!
//! Agents are hecs entities carrying an `AgentTag`, a `Movement` and their
//! own `RngStream`. The pool keeps an id-ordered index so every pass over
//! the agents happens in ascending id order, independent of spawn or
//! removal history. Spawn requests are queued and only materialized by
//! `drain_spawn_queue`, which the engine calls at the tick boundary.

use std::collections::{BTreeMap, VecDeque};

use hecs::{Entity, World};

use gridhaunt_core::config::{HumanSpawn, LevelConfig};
use gridhaunt_core::constants::DEFAULT_MOVE_DURATION;
use gridhaunt_core::enums::{AgentKind, SpiritType};
use gridhaunt_core::state::AgentView;
use gridhaunt_core::types::{AgentId, GridBounds, GridCell};
use gridhaunt_grid::GridTopology;

use crate::collision::CollisionResolver;
use crate::components::{AgentTag, Movement, RngStream};
use crate::movement;
use crate::rng;

pub struct AgentPool {
    kind: AgentKind,
    world: World,
    index: BTreeMap<AgentId, Entity>,
    next_id: AgentId,
    spawn_queue: VecDeque<SpiritType>,
    seed: i64,
    bounds: GridBounds,
    move_duration: f32,
}

impl AgentPool {
    pub fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            world: World::new(),
            index: BTreeMap::new(),
            next_id: 0,
            spawn_queue: VecDeque::new(),
            seed: gridhaunt_core::constants::DEFAULT_SEED,
            bounds: GridBounds::default(),
            move_duration: DEFAULT_MOVE_DURATION,
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Replace every agent with the level's initial population.
    ///
    /// Ids restart at 0. Types are assigned round-robin, except humans placed
    /// on the level's spawn points, which take the spawn point's type and cell.
    pub fn initialize_spawn(
        &mut self,
        level: &LevelConfig,
        seed: i64,
        move_duration: f32,
        topology: &GridTopology,
    ) -> Vec<AgentId> {
        self.clear();
        self.seed = seed;
        self.bounds = level.bounds;
        self.move_duration = move_duration;

        let (count, spawn_points): (u32, &[HumanSpawn]) = match self.kind {
            AgentKind::Ghost => (level.initial_ghost_count, &[]),
            AgentKind::Human => (level.initial_human_count, level.active_human_spawns()),
        };

        (0..count as usize)
            .map(|i| match spawn_points.get(i) {
                Some(point) => self.spawn(point.spirit, Some(point.cell), topology),
                None => self.spawn(SpiritType::from_index(i), None, topology),
            })
            .collect()
    }

    /// Queue a spawn for the next tick boundary.
    pub fn queue_spawn(&mut self, spirit: SpiritType) {
        self.spawn_queue.push_back(spirit);
    }

    pub fn pending_spawns(&self) -> usize {
        self.spawn_queue.len()
    }

    /// Materialize every queued spawn, in FIFO order.
    pub fn drain_spawn_queue(&mut self, topology: &GridTopology) -> Vec<(AgentId, SpiritType)> {
        let mut spawned = Vec::with_capacity(self.spawn_queue.len());
        while let Some(spirit) = self.spawn_queue.pop_front() {
            spawned.push((self.spawn(spirit, None, topology), spirit));
        }
        spawned
    }

    fn spawn(
        &mut self,
        spirit: SpiritType,
        start: Option<GridCell>,
        topology: &GridTopology,
    ) -> AgentId {
        let id = self.next_id;
        self.next_id += 1;

        let mut stream = rng::for_agent(self.seed, id, self.kind.seed_offset());
        let movement = movement::setup(
            &mut stream,
            &self.bounds,
            topology,
            start,
            self.move_duration,
        );
        tracing::debug!(kind = ?self.kind, id, ?spirit, cell = %movement.current, "agent spawned");

        let tag = AgentTag {
            id,
            kind: self.kind,
            spirit,
        };
        let entity = self.world.spawn((tag, movement, RngStream(stream)));
        self.index.insert(id, entity);
        id
    }

    /// Advance every agent in id order. Arrivals go to `resolver`.
    /// Returns true iff no agent is still mid-step.
    pub fn tick(
        &mut self,
        dt: f32,
        begin_move: bool,
        topology: &GridTopology,
        resolver: &mut CollisionResolver,
    ) -> bool {
        let mut all_arrived = true;
        for &entity in self.index.values() {
            let Ok((tag, motion, stream)) = self
                .world
                .query_one_mut::<(&AgentTag, &mut Movement, &mut RngStream)>(entity)
            else {
                continue;
            };
            if let Some(cell) = movement::tick(
                motion,
                &mut stream.0,
                &self.bounds,
                topology,
                dt,
                begin_move,
            ) {
                resolver.register_arrival(self.kind, cell, tag.agent_ref());
            }
            if motion.is_moving() {
                all_arrived = false;
            }
        }
        all_arrived
    }

    /// Remove an agent. Returns its last cell, or `None` if it was not present.
    pub fn remove(&mut self, id: AgentId) -> Option<GridCell> {
        let entity = self.index.remove(&id)?;
        let cell = self
            .world
            .get::<&Movement>(entity)
            .ok()
            .map(|motion| motion.current);
        let _ = self.world.despawn(entity);
        tracing::debug!(kind = ?self.kind, id, "agent removed");
        cell
    }

    /// Drop every agent and pending spawn. Ids restart at 0.
    pub fn clear(&mut self) {
        self.world.clear();
        self.index.clear();
        self.spawn_queue.clear();
        self.next_id = 0;
    }

    pub fn count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.index.contains_key(&id)
    }

    /// Live ids in ascending order.
    pub fn ids(&self) -> Vec<AgentId> {
        self.index.keys().copied().collect()
    }

    pub fn tag(&self, id: AgentId) -> Option<AgentTag> {
        let entity = *self.index.get(&id)?;
        self.world.get::<&AgentTag>(entity).ok().map(|tag| *tag)
    }

    pub fn movement(&self, id: AgentId) -> Option<Movement> {
        let entity = *self.index.get(&id)?;
        self.world
            .get::<&Movement>(entity)
            .ok()
            .map(|motion| (*motion).clone())
    }

    /// Render-facing view of every agent, in id order.
    pub fn views(&self) -> Vec<AgentView> {
        self.index
            .values()
            .filter_map(|&entity| {
                let tag = self.world.get::<&AgentTag>(entity).ok()?;
                let motion = self.world.get::<&Movement>(entity).ok()?;
                Some(AgentView {
                    id: tag.id,
                    spirit: tag.spirit,
                    cell: motion.current,
                    target: motion.target,
                    position: motion.position,
                    is_moving: motion.is_moving(),
                })
            })
            .collect()
    }
}
