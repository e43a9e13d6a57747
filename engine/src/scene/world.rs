//! World - ordered scene graph with gravity and screen projection
//!
//! Nodes are kept in a `Vec` in draw order. Callers refer to nodes by
//! [`ShapeHandle`], an opaque slot + generation pair, never by raw index, so
//! a handle stays valid while other nodes come and go and goes stale once
//! its own node is removed.
//!
//! Removing a node renumbers every node after it, keeping each node's
//! scene index equal to its position in the draw order.

use tracing::debug;

use super::{Node, SceneError, UpdateContext};
use crate::config::WorldConfig;
use crate::craft::Craft;
use crate::effects::EffectSink;
use crate::input::InputSource;
use crate::math::{Matrix2D, Vector2D};
use crate::render::DrawTarget;

/// Opaque reference to a node owned by a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle {
    slot: u32,
    generation: u32,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    generation: u32,
    scene_index: Option<usize>,
}

/// The scene: gravity, the model-to-screen transform and nodes in draw order.
#[derive(Debug, Clone)]
pub struct World {
    gravity: Vector2D,
    screen: Matrix2D,
    nodes: Vec<(ShapeHandle, Node)>,
    slots: Vec<Slot>,
    free_slots: Vec<u32>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(&WorldConfig::default())
    }
}

impl World {
    /// Create an empty world. Gravity and the screen transform are fixed
    /// from here on.
    pub fn new(config: &WorldConfig) -> Self {
        Self::with_transform(config.gravity(), config.screen_transform())
    }

    /// Create an empty world with an explicit screen transform.
    pub fn with_transform(gravity: Vector2D, screen: Matrix2D) -> Self {
        Self {
            gravity,
            screen,
            nodes: Vec::new(),
            slots: Vec::new(),
            free_slots: Vec::new(),
        }
    }

    /// Append a node at the end of the draw order.
    pub fn add(&mut self, node: impl Into<Node>) -> ShapeHandle {
        let mut node = node.into();
        let index = self.nodes.len();

        let handle = match self.free_slots.pop() {
            Some(slot) => {
                let entry = &mut self.slots[slot as usize];
                entry.scene_index = Some(index);
                ShapeHandle {
                    slot,
                    generation: entry.generation,
                }
            }
            None => {
                let slot = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    scene_index: Some(index),
                });
                ShapeHandle {
                    slot,
                    generation: 0,
                }
            }
        };

        node.shape_mut().set_scene_index(Some(index));
        self.nodes.push((handle, node));
        debug!(?handle, index, "node added");
        handle
    }

    /// Remove a node and return it, detached.
    ///
    /// Every node after it moves up one place and is renumbered. An unknown
    /// or stale handle is an error and leaves the world untouched.
    pub fn remove(&mut self, handle: ShapeHandle) -> Result<Node, SceneError> {
        let index = self
            .scene_index(handle)
            .ok_or(SceneError::UnknownHandle(handle))?;

        let (_, mut node) = self.nodes.remove(index);
        node.shape_mut().set_scene_index(None);

        let slot = &mut self.slots[handle.slot as usize];
        slot.generation = slot.generation.wrapping_add(1);
        slot.scene_index = None;
        self.free_slots.push(handle.slot);

        for (i, (h, n)) in self.nodes.iter_mut().enumerate().skip(index) {
            n.shape_mut().set_scene_index(Some(i));
            self.slots[h.slot as usize].scene_index = Some(i);
        }

        debug!(?handle, index, remaining = self.nodes.len(), "node removed");
        Ok(node)
    }

    /// Current draw-order position of a node, `None` if the handle is stale.
    pub fn scene_index(&self, handle: ShapeHandle) -> Option<usize> {
        let slot = self.slots.get(handle.slot as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.scene_index
    }

    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.scene_index(handle).is_some()
    }

    pub fn get(&self, handle: ShapeHandle) -> Option<&Node> {
        let index = self.scene_index(handle)?;
        self.nodes.get(index).map(|(_, node)| node)
    }

    pub fn craft(&self, handle: ShapeHandle) -> Option<&Craft> {
        self.get(handle).and_then(Node::as_craft)
    }

    /// Run `f` on a node in place.
    ///
    /// The node's scene index is re-stamped afterwards, so even a node
    /// replaced wholesale inside `f` stays consistent with its handle.
    pub fn modify<R>(
        &mut self,
        handle: ShapeHandle,
        f: impl FnOnce(&mut Node) -> R,
    ) -> Result<R, SceneError> {
        let index = self
            .scene_index(handle)
            .ok_or(SceneError::UnknownHandle(handle))?;
        let (_, node) = &mut self.nodes[index];
        let out = f(node);
        node.shape_mut().set_scene_index(Some(index));
        Ok(out)
    }

    /// Run `f` on a craft in place. Same re-stamping as [`World::modify`].
    pub fn modify_craft<R>(
        &mut self,
        handle: ShapeHandle,
        f: impl FnOnce(&mut Craft) -> R,
    ) -> Result<R, SceneError> {
        self.modify(handle, |node| node.as_craft_mut().map(f))?
            .ok_or(SceneError::NotACraft(handle))
    }

    /// Nodes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeHandle, &Node)> + '_ {
        self.nodes.iter().map(|(h, n)| (*h, n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn gravity(&self) -> Vector2D {
        self.gravity
    }

    pub fn screen_transform(&self) -> &Matrix2D {
        &self.screen
    }

    /// Update every node once, in draw order.
    pub fn update(&mut self, input: &dyn InputSource, effects: &mut dyn EffectSink) {
        let mut ctx = UpdateContext {
            gravity: self.gravity,
            screen: &self.screen,
            input,
            effects,
        };
        for (_, node) in &mut self.nodes {
            node.update(&mut ctx);
        }
    }

    /// Render every node once, in draw order.
    pub fn render(&self, target: &mut dyn DrawTarget, effects: &mut dyn EffectSink) {
        for (_, node) in &self.nodes {
            node.render(target, &self.screen, effects);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::craft::CraftConfig;
    use crate::effects::NoEffects;
    use crate::input::ButtonState;
    use crate::render::LineRecorder;
    use crate::scene::Shape;

    fn indices(world: &World) -> Vec<Option<usize>> {
        world.iter().map(|(_, n)| n.scene_index()).collect()
    }

    #[test]
    fn test_add_assigns_contiguous_indices() {
        let mut world = World::default();
        let a = world.add(Shape::quad(1.0, 1.0));
        let b = world.add(Shape::quad(2.0, 2.0));
        let c = world.add(Shape::quad(3.0, 3.0));

        assert_eq!(world.scene_index(a), Some(0));
        assert_eq!(world.scene_index(b), Some(1));
        assert_eq!(world.scene_index(c), Some(2));
        assert_eq!(indices(&world), vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_remove_renumbers_followers() {
        let mut world = World::default();
        let a = world.add(Shape::quad(1.0, 1.0));
        let b = world.add(Shape::quad(2.0, 2.0));
        let c = world.add(Shape::quad(3.0, 3.0));

        let removed = world.remove(a).expect("present");
        assert_eq!(removed.scene_index(), None);

        assert_eq!(world.scene_index(b), Some(0));
        assert_eq!(world.scene_index(c), Some(1));
        assert_eq!(indices(&world), vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_stale_handle_rejected() {
        let mut world = World::default();
        let a = world.add(Shape::quad(1.0, 1.0));
        world.remove(a).expect("present");

        assert!(matches!(world.remove(a), Err(SceneError::UnknownHandle(h)) if h == a));
        assert!(world.get(a).is_none());

        // Slot reuse does not revive the old handle
        let b = world.add(Shape::quad(2.0, 2.0));
        assert_ne!(a, b);
        assert!(!world.contains(a));
        assert!(world.contains(b));
    }

    #[test]
    fn test_failed_remove_changes_nothing() {
        let mut world = World::default();
        let a = world.add(Shape::quad(1.0, 1.0));
        let b = world.add(Shape::quad(2.0, 2.0));
        world.remove(a).expect("present");

        assert!(world.remove(a).is_err());
        assert_eq!(world.len(), 1);
        assert_eq!(world.scene_index(b), Some(0));
    }

    #[test]
    fn test_replacing_a_node_keeps_its_index() {
        let mut world = World::default();
        world.add(Shape::quad(1.0, 1.0));
        let b = world.add(Shape::quad(2.0, 2.0));

        world
            .modify(b, |node| *node = Node::Shape(Shape::quad(3.0, 3.0)))
            .expect("present");

        assert_eq!(indices(&world), vec![Some(0), Some(1)]);
        assert_eq!(world.scene_index(b), Some(1));
        assert_eq!(world.get(b).expect("present").shape().vertices()[2], Vector2D::new(3.0, 3.0));
    }

    #[test]
    fn test_replacing_a_craft_keeps_its_index() {
        let mut world = World::default();
        world.add(Shape::quad(1.0, 1.0));
        let h = world.add(Craft::with_default_hull(&CraftConfig::default()));

        world
            .modify_craft(h, |craft| *craft = Craft::with_default_hull(&CraftConfig::default()))
            .expect("craft");

        assert_eq!(world.craft(h).expect("craft").shape().scene_index(), Some(1));
    }

    #[test]
    fn test_modify_reports_bad_handles() {
        let mut world = World::default();
        let shape = world.add(Shape::quad(1.0, 1.0));
        assert_eq!(
            world.modify_craft(shape, |craft| craft.velocity()),
            Err(SceneError::NotACraft(shape))
        );

        world.remove(shape).expect("present");
        assert_eq!(world.modify(shape, |_| ()), Err(SceneError::UnknownHandle(shape)));
    }

    #[test]
    fn test_update_refreshes_all_shapes() {
        let mut world = World::with_transform(Vector2D::ZERO, Matrix2D::identity());
        let h = world.add(Shape::quad(1.0, 1.0).with_world_pos(Vector2D::new(5.0, 0.0)));
        world.update(&ButtonState::new(), &mut NoEffects);

        let node = world.get(h).expect("present");
        assert_eq!(node.shape().render_points()[0], Vector2D::new(4.0, -1.0));
    }

    #[test]
    fn test_render_in_draw_order() {
        let mut world = World::default();
        world.add(Shape::regular_polygon(3, 1.0));
        world.add(Shape::regular_polygon(5, 1.0));
        world.update(&ButtonState::new(), &mut NoEffects);

        let mut rec = LineRecorder::new();
        world.render(&mut rec, &mut NoEffects);
        assert_eq!(rec.len(), 8);
        // Triangle edges come first
        assert_eq!(rec.lines()[2].to, world.iter().next().expect("first").1.shape().render_points()[0]);
    }
}
