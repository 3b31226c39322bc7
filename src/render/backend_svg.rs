use crate::bail;
use crate::geometry::Edges;
use crate::render::command::RenderCommand;
use crate::result::SnapResult;
use crate::types::{Color, Rect, Size};
use itertools::Itertools;
use std::io::Write;
use svg::node::element::{Circle, Group, Path, Rectangle, Text};
use svg::{Document, Node};

pub fn render_svg(
    size: Size,
    render_list: &[RenderCommand],
    write: &mut dyn Write,
) -> SnapResult<()> {
    let document = render_svg_document(size, render_list)?;
    write.write_all(&document.to_string().into_bytes())?;
    Ok(())
}

pub fn render_svg_document(size: Size, render_list: &[RenderCommand]) -> SnapResult<Document> {
    let mut document = Document::new().set("viewBox", (0, 0, size.width, size.height));
    #[derive(Debug)]
    struct Entry {
        group: Group,
        children: Vec<Box<dyn Node>>,
    }

    let entry_stack: &mut Vec<Entry> = &mut vec![Entry {
        group: Group::new(),
        children: Vec::new(),
    }];
    let mut save_stack = vec![];
    fn push_element(element: impl Node, entry_stack: &mut [Entry]) {
        if let Some(entry) = entry_stack.last_mut() {
            entry.children.push(Box::new(element));
        }
    }
    fn push_group(group: Group, entry_stack: &mut Vec<Entry>) {
        entry_stack.push(Entry {
            group,
            children: Vec::new(),
        });
    }

    // The root entry is never popped.
    fn pop_stack(entry_stack: &mut Vec<Entry>) {
        if entry_stack.len() < 2 {
            return;
        }
        let Some(Entry {
            mut group,
            children,
        }) = entry_stack.pop()
        else {
            return;
        };
        for child in children {
            group.append(child);
        }
        push_element(group, entry_stack);
    }
    fn rectangle(rect: &Rect) -> Rectangle {
        Rectangle::new()
            .set("x", rect.origin.x)
            .set("y", rect.origin.y)
            .set("width", rect.size.width)
            .set("height", rect.size.height)
    }
    fn rect_path(rect: &Rect) -> String {
        let edges = Edges::from_rect(rect);
        format!(
            "M {} {} H {} V {} H {} Z",
            edges.left, edges.top, edges.right, edges.bottom, edges.left
        )
    }
    fn color_group(attribute: &str, color: &Color) -> Group {
        let rgba = color.rgba;
        let group = Group::new().set(attribute, format!("rgb({} {} {})", rgba.r, rgba.g, rgba.b));
        if rgba.a == 255 {
            group
        } else {
            group.set(format!("{attribute}-opacity"), color.opacity())
        }
    }

    for render_command in render_list {
        match render_command {
            RenderCommand::SetStrokeWidth(width) => {
                push_group(Group::new().set("stroke-width", *width), entry_stack);
            }
            RenderCommand::SetStrokeColor(color) => {
                push_group(color_group("stroke", color), entry_stack);
            }
            RenderCommand::SetFillColor(color) => {
                push_group(color_group("fill", color), entry_stack);
            }
            RenderCommand::SetLineDash(dashes) => {
                let pattern = if dashes.is_empty() {
                    "none".to_string()
                } else {
                    dashes.iter().join(" ")
                };
                push_group(Group::new().set("stroke-dasharray", pattern), entry_stack);
            }
            RenderCommand::SetFontSize(size) => {
                push_group(Group::new().set("font-size", *size), entry_stack);
            }
            RenderCommand::FillRect { rect } => {
                push_element(rectangle(rect).set("stroke", "none"), entry_stack);
            }
            RenderCommand::FillRectWithHole { outer, hole } => {
                push_element(
                    Path::new()
                        .set("d", format!("{} {}", rect_path(outer), rect_path(hole)))
                        .set("fill-rule", "evenodd")
                        .set("stroke", "none"),
                    entry_stack,
                );
            }
            RenderCommand::FillRoundRect { rect, radius } => {
                push_element(
                    rectangle(rect).set("rx", *radius).set("stroke", "none"),
                    entry_stack,
                );
            }
            RenderCommand::StrokeRect { rect } => {
                push_element(rectangle(rect).set("fill", "none"), entry_stack);
            }
            RenderCommand::FillCircle { center, radius } => {
                push_element(
                    Circle::new()
                        .set("cx", center.x)
                        .set("cy", center.y)
                        .set("r", *radius)
                        .set("stroke", "none"),
                    entry_stack,
                );
            }
            RenderCommand::DrawText { position, text } => {
                push_element(
                    Text::new(text.as_str())
                        .set("x", position.x)
                        .set("y", position.y)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central"),
                    entry_stack,
                );
            }
            RenderCommand::Save => {
                save_stack.push(entry_stack.len());
            }
            RenderCommand::Restore => {
                let Some(desired_size) = save_stack.pop() else {
                    bail!("Restore without matching Save");
                };
                while entry_stack.len() > desired_size {
                    pop_stack(entry_stack);
                }
            }
            RenderCommand::Translate { x, y } => {
                push_group(
                    Group::new().set("transform", format!("translate({} {})", x, y)),
                    entry_stack,
                );
            }
        }
    }
    while entry_stack.len() > 1 {
        pop_stack(entry_stack);
    }
    let root_children = entry_stack
        .pop()
        .map(|entry| entry.children)
        .unwrap_or_default();
    for child in root_children {
        document.append(child);
    }
    Ok(document)
}
