//! Layout model for the battle screen panels.

use taffy::TaffyTree;
use taffy::prelude::*;

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    main_row: NodeId,
    fighters: NodeId,
    player: NodeId,
    enemy: NodeId,
    event_log: NodeId,
    help: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FrameLayout {
    pub status: PanelRect,
    pub player: PanelRect,
    pub enemy: PanelRect,
    pub event_log: PanelRect,
    pub help: PanelRect,
}

fn gap_below(amount: f32) -> taffy::Rect<LengthPercentageAuto> {
    taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(amount) }
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> Result<LayoutNodes, taffy::TaffyError> {
    let status = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(40.0) },
        margin: gap_below(20.0),
        ..Default::default()
    })?;
    let player = taffy.new_leaf(Style {
        flex_grow: 1.0,
        margin: gap_below(20.0),
        ..Default::default()
    })?;
    let enemy = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() })?;
    let fighters = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            flex_grow: 1.0,
            ..Default::default()
        },
        &[player, enemy],
    )?;
    let event_log = taffy.new_leaf(Style {
        flex_grow: 1.6,
        margin: taffy::Rect { left: length(20.0), right: zero(), top: zero(), bottom: zero() },
        ..Default::default()
    })?;
    let main_row = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            size: Size { width: percent(1.0), height: auto() },
            flex_grow: 1.0,
            margin: gap_below(20.0),
            ..Default::default()
        },
        &[fighters, event_log],
    )?;
    let help = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(60.0) },
        ..Default::default()
    })?;
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            padding: taffy::Rect {
                left: length(20.0),
                right: length(20.0),
                top: length(20.0),
                bottom: length(20.0),
            },
            ..Default::default()
        },
        &[status, main_row, help],
    )?;

    Ok(LayoutNodes { root, status, main_row, fighters, player, enemy, event_log, help })
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<FrameLayout, taffy::TaffyError> {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size)?;

    let l_root = taffy.layout(nodes.root)?;
    let l_main = taffy.layout(nodes.main_row)?;
    let l_fighters = taffy.layout(nodes.fighters)?;

    Ok(FrameLayout {
        status: panel_rect(taffy.layout(nodes.status)?, &[l_root]),
        player: panel_rect(taffy.layout(nodes.player)?, &[l_root, l_main, l_fighters]),
        enemy: panel_rect(taffy.layout(nodes.enemy)?, &[l_root, l_main, l_fighters]),
        event_log: panel_rect(taffy.layout(nodes.event_log)?, &[l_root, l_main]),
        help: panel_rect(taffy.layout(nodes.help)?, &[l_root]),
    })
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> PanelRect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    PanelRect { x, y, width: layout.size.width, height: layout.size.height }
}
