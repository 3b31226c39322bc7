use crate::geometry::Edges;
use crate::overlay::SnapshotOverlay;
use crate::render::command::RenderCommand;
use crate::types::Point;

/// Paints the overlay: the dimmed mask around the selection and, unless the
/// controls are hidden, the dashed border, corner dots and buttons.
pub fn render_overlay(overlay: &SnapshotOverlay) -> Vec<RenderCommand> {
    let config = overlay.config();
    let styling = &config.styling;
    let selection = overlay.selection();
    let mut commands = vec![
        RenderCommand::Save,
        RenderCommand::SetFillColor(styling.mask_color),
        RenderCommand::FillRectWithHole {
            outer: overlay.bounds(),
            hole: selection,
        },
        RenderCommand::Restore,
    ];
    if !overlay.controls_visible() {
        return commands;
    }

    commands.extend([
        RenderCommand::Save,
        RenderCommand::SetStrokeColor(styling.border_color),
        RenderCommand::SetStrokeWidth(config.border_width),
        RenderCommand::SetLineDash(config.border_dash.clone()),
        RenderCommand::StrokeRect { rect: selection },
        RenderCommand::Restore,
    ]);

    let edges = Edges::from_rect(&selection);
    let radius = config.corner_dot_diameter / 2.0;
    commands.push(RenderCommand::Save);
    commands.push(RenderCommand::SetFillColor(styling.handle_color));
    for (x, y) in [
        (edges.left, edges.top),
        (edges.right, edges.top),
        (edges.left, edges.bottom),
        (edges.right, edges.bottom),
    ] {
        commands.push(RenderCommand::FillCircle {
            center: Point::new(x, y),
            radius,
        });
    }
    commands.push(RenderCommand::Restore);

    let buttons = &config.buttons;
    for placed in overlay.button_layout().buttons() {
        let fill = if overlay.pressed_button() == Some(placed.button) {
            styling.button_pressed_color
        } else {
            styling.button_color
        };
        commands.extend([
            RenderCommand::Save,
            RenderCommand::SetFillColor(fill),
            RenderCommand::FillRoundRect {
                rect: placed.rect,
                radius: buttons.corner_radius,
            },
            RenderCommand::Restore,
            RenderCommand::Save,
            RenderCommand::SetFillColor(styling.button_text_color),
            RenderCommand::SetFontSize(styling.text_size),
            RenderCommand::DrawText {
                position: placed.rect.center(),
                text: placed.button.label(buttons).to_string(),
            },
            RenderCommand::Restore,
        ]);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::events::PointerEvent;
    use crate::overlay::buttons::OverlayButton;
    use crate::render::backend_svg::render_svg;
    use crate::test::{overlay_400x300, rect};
    use crate::types::{Color, Size};
    use assertables::assert_contains;
    use expect_test::expect;

    #[test]
    fn hidden_controls_leave_only_the_mask() {
        let mut overlay = overlay_400x300();
        overlay.set_controls_visible(false);
        assert_eq!(
            render_overlay(&overlay),
            vec![
                RenderCommand::Save,
                RenderCommand::SetFillColor(Color::BLACK.with_alpha(153)),
                RenderCommand::FillRectWithHole {
                    outer: rect(0.0, 0.0, 400.0, 300.0),
                    hole: rect(120.0, 70.0, 160.0, 160.0),
                },
                RenderCommand::Restore,
            ]
        );
    }

    #[test]
    fn hidden_controls_svg() {
        let mut overlay = overlay_400x300();
        overlay.set_controls_visible(false);
        let mut buffer = Vec::new();
        render_svg(Size::new(400.0, 300.0), &overlay.render(), &mut buffer).unwrap();
        expect![[r#"
            <svg viewBox="0 0 400 300" xmlns="http://www.w3.org/2000/svg">
            <g fill="rgb(0 0 0)" fill-opacity="0.6">
            <path d="M 0 0 H 400 V 300 H 0 Z M 120 70 H 280 V 230 H 120 Z" fill-rule="evenodd" stroke="none"/>
            </g>
            </svg>"#]]
        .assert_eq(&String::from_utf8(buffer).unwrap());
    }

    #[test]
    fn corner_dots_sit_on_the_corners() {
        let overlay = overlay_400x300();
        let centers: Vec<Point> = render_overlay(&overlay)
            .into_iter()
            .filter_map(|command| match command {
                RenderCommand::FillCircle { center, radius } => {
                    assert_eq!(radius, 3.0);
                    Some(center)
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            centers,
            vec![
                Point::new(120.0, 70.0),
                Point::new(280.0, 70.0),
                Point::new(120.0, 230.0),
                Point::new(280.0, 230.0),
            ]
        );
    }

    #[test]
    fn buttons_are_labelled() {
        let overlay = overlay_400x300();
        let labels: Vec<String> = render_overlay(&overlay)
            .into_iter()
            .filter_map(|command| match command {
                RenderCommand::DrawText { text, .. } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Cancel", "FullScreen", "Share"]);
    }

    #[test]
    fn pressed_button_is_highlighted() {
        let mut overlay = overlay_400x300();
        let share = overlay.button_layout().rect_of(OverlayButton::Share).unwrap();
        let pressed_color = overlay.config().styling.button_pressed_color;
        assert!(!render_overlay(&overlay).contains(&RenderCommand::SetFillColor(pressed_color)));
        overlay
            .handle_event(PointerEvent::began(Point::new(share.max_x() - 1.0, share.center().y)))
            .unwrap();
        assert_eq!(overlay.pressed_button(), Some(OverlayButton::Share));
        assert!(render_overlay(&overlay).contains(&RenderCommand::SetFillColor(pressed_color)));
    }

    #[test]
    fn light_styling() {
        let mut config = crate::config::OverlayConfig::default();
        config.styling = crate::infrastructure::styling::MaskStyling::light();
        let overlay = SnapshotOverlay::new(rect(0.0, 0.0, 400.0, 300.0), config);
        let commands = render_overlay(&overlay);
        assert_eq!(
            commands[1],
            RenderCommand::SetFillColor(Color::WHITE.with_alpha(153))
        );
        assert!(commands.contains(&RenderCommand::SetStrokeColor(Color::gray(40))));
    }

    #[test]
    fn border_is_dashed_in_svg() {
        let overlay = overlay_400x300();
        let mut buffer = Vec::new();
        render_svg(Size::new(400.0, 300.0), &overlay.render(), &mut buffer).unwrap();
        let svg = String::from_utf8(buffer).unwrap();
        assert_contains!(svg, r#"stroke-dasharray="8 5""#);
        assert_contains!(svg, r#"<rect fill="none" height="160" width="160" x="120" y="70"/>"#);
        assert_contains!(svg, "FullScreen");
    }
}
