//! Scene node - the closed set of things a world can hold
//!
//! Dispatch is a plain `match`: a plain shape only refreshes and draws its
//! geometry, a craft runs its flight model around the same geometry.

use super::{Shape, UpdateContext};
use crate::craft::Craft;
use crate::effects::EffectSink;
use crate::math::Matrix2D;
use crate::render::DrawTarget;

/// A node in the world's draw order.
#[derive(Debug, Clone)]
pub enum Node {
    /// Static geometry (terrain, landing pads, decoration)
    Shape(Shape),
    /// Player craft
    Craft(Craft),
}

impl Node {
    pub fn shape(&self) -> &Shape {
        match self {
            Node::Shape(shape) => shape,
            Node::Craft(craft) => craft.shape(),
        }
    }

    pub(crate) fn shape_mut(&mut self) -> &mut Shape {
        match self {
            Node::Shape(shape) => shape,
            Node::Craft(craft) => craft.shape_mut(),
        }
    }

    pub fn as_craft(&self) -> Option<&Craft> {
        match self {
            Node::Craft(craft) => Some(craft),
            Node::Shape(_) => None,
        }
    }

    pub fn as_craft_mut(&mut self) -> Option<&mut Craft> {
        match self {
            Node::Craft(craft) => Some(craft),
            Node::Shape(_) => None,
        }
    }

    pub fn scene_index(&self) -> Option<usize> {
        self.shape().scene_index()
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        match self {
            Node::Shape(shape) => shape.update(ctx.screen),
            Node::Craft(craft) => craft.update(ctx),
        }
    }

    pub fn render(
        &self,
        target: &mut dyn DrawTarget,
        screen: &Matrix2D,
        effects: &mut dyn EffectSink,
    ) {
        match self {
            Node::Shape(shape) => shape.render(target),
            Node::Craft(craft) => craft.render(target, screen, effects),
        }
    }
}

impl From<Shape> for Node {
    fn from(shape: Shape) -> Self {
        Node::Shape(shape)
    }
}

impl From<Craft> for Node {
    fn from(craft: Craft) -> Self {
        Node::Craft(craft)
    }
}
