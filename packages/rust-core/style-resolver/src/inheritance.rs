//! Style inheritance
//!
//! Implements the WordprocessingML inheritance rule for text properties:
//! character formatting cascades from a paragraph's resolved style down
//! through its runs, while box-model properties (margin, padding, border)
//! never inherit — they are set once per paragraph/table cell.

use layout_types::{BoxStyle, StyleDeclaration, TextStyle};

/// Inherit text-specific styles from a parent style, dropping non-inherited
/// box-model properties back to their defaults.
///
/// # Example
/// ```
/// use style_resolver::inherit_text_styles;
/// use layout_types::{StyleDeclaration, Spacing, Color, FontWeight};
///
/// let mut parent = StyleDeclaration::default();
/// parent.text.font_size = Some(16.0);
/// parent.text.font_weight = Some(FontWeight::Bold);
/// parent.text.color = Some(Color::rgb(0, 0, 0));
/// parent.box_model.margin = Some(Spacing::uniform(10.0)); // not inherited
///
/// let inherited = inherit_text_styles(&parent);
/// assert_eq!(inherited.text.font_size, Some(16.0));
/// assert_eq!(inherited.text.font_weight, Some(FontWeight::Bold));
/// assert!(inherited.box_model.margin.is_none());
/// ```
pub fn inherit_text_styles(parent: &StyleDeclaration) -> StyleDeclaration {
    StyleDeclaration {
        text: TextStyle {
            font_family: parent.text.font_family.clone(),
            font_size: parent.text.font_size,
            font_weight: parent.text.font_weight,
            font_style: parent.text.font_style,
            color: parent.text.color,
            text_align: parent.text.text_align,
            line_height: parent.text.line_height,
            letter_spacing: parent.text.letter_spacing,
            text_transform: parent.text.text_transform,
            text_decoration: parent.text.text_decoration,
            vertical_align: None,
            white_space: None,
        },
        box_model: BoxStyle::default(),
    }
}

/// Merge a child's explicitly set properties over properties inherited from
/// a parent — explicit always wins, otherwise the parent's value carries.
///
/// # Example
/// ```
/// use style_resolver::apply_inherited_properties;
/// use layout_types::{StyleDeclaration, Color};
///
/// let mut parent = StyleDeclaration::default();
/// parent.text.font_size = Some(16.0);
/// parent.text.color = Some(Color::rgb(0, 0, 0));
///
/// let mut child = StyleDeclaration::default();
/// child.text.font_size = Some(14.0); // explicit, overrides inherited 16.0
///
/// let result = apply_inherited_properties(child, &parent);
/// assert_eq!(result.text.font_size, Some(14.0));
/// assert_eq!(result.text.color, Some(Color::rgb(0, 0, 0))); // inherited
/// ```
pub fn apply_inherited_properties(
    child_style: StyleDeclaration,
    parent: &StyleDeclaration,
) -> StyleDeclaration {
    let inherited = inherit_text_styles(parent);

    StyleDeclaration {
        text: TextStyle {
            font_family: child_style.text.font_family.or(inherited.text.font_family),
            font_size: child_style.text.font_size.or(inherited.text.font_size),
            font_weight: child_style.text.font_weight.or(inherited.text.font_weight),
            font_style: child_style.text.font_style.or(inherited.text.font_style),
            color: child_style.text.color.or(inherited.text.color),
            text_align: child_style.text.text_align.or(inherited.text.text_align),
            line_height: child_style.text.line_height.or(inherited.text.line_height),
            letter_spacing: child_style
                .text
                .letter_spacing
                .or(inherited.text.letter_spacing),
            text_transform: child_style
                .text
                .text_transform
                .or(inherited.text.text_transform),
            text_decoration: child_style
                .text
                .text_decoration
                .or(inherited.text.text_decoration),
            vertical_align: child_style.text.vertical_align,
            white_space: child_style.text.white_space,
        },
        box_model: child_style.box_model,
    }
}
