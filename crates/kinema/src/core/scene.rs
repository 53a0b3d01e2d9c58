use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Flat entity store. Meant for hundreds of movers, not millions; pair
/// probing over it is quadratic.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    /// Create an empty scene with room for a few dozen entities.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity. Returns its id for convenience.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Remove an entity by ID. Order of the remaining entities is not kept.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.swap_remove(idx))
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate over all entities in spawn order (until a despawn reorders them).
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Every unordered pair of distinct entities, each pair once.
    pub fn pairs(&self) -> impl Iterator<Item = (&Entity, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .flat_map(move |(i, a)| self.entities[i + 1..].iter().map(move |b| (a, b)))
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Find the first entity with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.tag == tag)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::shape(EntityId(1), 2.0, 2.0).with_pos(DVec2::new(10.0, 20.0)));
        assert_eq!(scene.get(id).unwrap().pos(), DVec2::new(10.0, 20.0));
    }

    #[test]
    fn despawn_removes_entity() {
        let mut scene = Scene::new();
        scene.spawn(Entity::shape(EntityId(1), 1.0, 1.0));
        assert!(scene.despawn(EntityId(1)).is_some());
        assert!(scene.despawn(EntityId(1)).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::shape(EntityId(1), 1.0, 1.0).with_tag("ball"));
        scene.spawn(Entity::shape(EntityId(2), 1.0, 1.0).with_tag("paddle"));
        assert_eq!(scene.find_by_tag("paddle").unwrap().id, EntityId(2));
        assert!(scene.find_by_tag("wall").is_none());
    }

    #[test]
    fn pairs_visits_each_pair_once() {
        let mut scene = Scene::new();
        for i in 0..4 {
            scene.spawn(Entity::shape(EntityId(i), 1.0, 1.0));
        }
        let pairs: Vec<(u32, u32)> = scene.pairs().map(|(a, b)| (a.id.0, b.id.0)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }
}
