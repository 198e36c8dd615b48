//! The stock wrapper catalog.
//!
//! Templates are single-line; layout is the job of the host's formatter,
//! which runs after every successful wrap.

use crate::WrapperSpec;

fn wrap_container(text: &str) -> String {
    format!("Container(child: {text})")
}

fn wrap_center(text: &str) -> String {
    format!("Center(child: {text})")
}

fn wrap_padding(text: &str) -> String {
    format!("Padding(padding: EdgeInsets.all(8.0), child: {text})")
}

fn wrap_align(text: &str) -> String {
    format!("Align(alignment: Alignment.center, child: {text})")
}

fn wrap_sized_box(text: &str) -> String {
    format!("SizedBox(width: 100.0, height: 100.0, child: {text})")
}

fn wrap_expanded(text: &str) -> String {
    format!("Expanded(child: {text})")
}

fn wrap_flexible(text: &str) -> String {
    format!("Flexible(child: {text})")
}

fn wrap_opacity(text: &str) -> String {
    format!("Opacity(opacity: 1.0, child: {text})")
}

fn wrap_clip_rrect(text: &str) -> String {
    format!("ClipRRect(borderRadius: BorderRadius.circular(8.0), child: {text})")
}

fn wrap_gesture_detector(text: &str) -> String {
    format!("GestureDetector(onTap: () {{}}, child: {text})")
}

fn wrap_column(text: &str) -> String {
    format!("Column(children: [{text}])")
}

fn wrap_row(text: &str) -> String {
    format!("Row(children: [{text}])")
}

fn wrap_stack(text: &str) -> String {
    format!("Stack(children: [{text}])")
}

fn wrap_wrap(text: &str) -> String {
    format!("Wrap(children: [{text}])")
}

/// Every wrapper the tool ships with, in presentation order.
pub fn builtin_wrappers() -> &'static [WrapperSpec] {
    &[
        WrapperSpec {
            id: "widget-wrap.wrapWithContainer",
            title: "Container",
            template: wrap_container,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithCenter",
            title: "Center",
            template: wrap_center,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithPadding",
            title: "Padding",
            template: wrap_padding,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithAlign",
            title: "Align",
            template: wrap_align,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithSizedBox",
            title: "SizedBox",
            template: wrap_sized_box,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithExpanded",
            title: "Expanded",
            template: wrap_expanded,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithFlexible",
            title: "Flexible",
            template: wrap_flexible,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithOpacity",
            title: "Opacity",
            template: wrap_opacity,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithClipRRect",
            title: "ClipRRect",
            template: wrap_clip_rrect,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithGestureDetector",
            title: "GestureDetector",
            template: wrap_gesture_detector,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithColumn",
            title: "Column",
            template: wrap_column,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithRow",
            title: "Row",
            template: wrap_row,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithStack",
            title: "Stack",
            template: wrap_stack,
        },
        WrapperSpec {
            id: "widget-wrap.wrapWithWrap",
            title: "Wrap",
            template: wrap_wrap,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn padding_template_matches_the_documented_wrap() {
        let spec = builtin_wrappers()
            .iter()
            .find(|w| w.title == "Padding")
            .unwrap();

        assert_eq!(
            (spec.template)("Text('hi')"),
            "Padding(padding: EdgeInsets.all(8.0), child: Text('hi'))"
        );
    }

    #[test]
    fn multi_child_wrappers_use_a_children_list() {
        for title in ["Column", "Row", "Stack", "Wrap"] {
            let spec = builtin_wrappers()
                .iter()
                .find(|w| w.title == title)
                .unwrap();
            let wrapped = (spec.template)("Text('x')");

            assert_eq!(wrapped, format!("{title}(children: [Text('x')])"));
        }
    }

    #[test]
    fn ids_are_unique_and_namespaced() {
        let mut seen = std::collections::HashSet::new();
        for spec in builtin_wrappers() {
            assert!(spec.id.starts_with("widget-wrap.wrapWith"));
            assert!(seen.insert(spec.id), "duplicate id {}", spec.id);
        }
    }

    #[test]
    fn every_template_keeps_the_original_text_intact() {
        let original = "Text('payload')";
        for spec in builtin_wrappers() {
            let wrapped = (spec.template)(original);
            assert!(
                wrapped.contains(original),
                "{} lost the wrapped text",
                spec.title
            );
        }
    }
}
