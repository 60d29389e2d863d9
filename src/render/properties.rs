//! Semantic categories and the style tables keyed by them.

use ratatui::style::Style;
use ratatui::text::Span;

use crate::document::token::{Indicator, TokenId, TokenKind, TokenStream};
use crate::theme::Theme;

/// Semantic category of a token, independent of highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MapKey,
    Anchor,
    Alias,
    Bool,
    String,
    Number,
    Null,
    Indicator,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::MapKey,
        Category::Anchor,
        Category::Alias,
        Category::Bool,
        Category::String,
        Category::Number,
        Category::Null,
        Category::Indicator,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Decides the category of token `id`.
///
/// Precedence: indicators first, then the name after an anchor or alias
/// marker, then anything directly followed by `:`, then the scalar kind.
/// Comments, directives and tags have no category and stay unstyled.
pub fn categorize(tokens: &TokenStream, id: TokenId) -> Option<Category> {
    let token = &tokens[id];
    if matches!(
        token.kind,
        TokenKind::Comment | TokenKind::Directive | TokenKind::Tag
    ) {
        return None;
    }

    if matches!(
        token.indicator(),
        Indicator::BlockStructure
            | Indicator::FlowCollection
            | Indicator::BlockScalar
            | Indicator::Document
    ) {
        return Some(Category::Indicator);
    }

    match tokens.prev_kind(id) {
        Some(TokenKind::Anchor) => return Some(Category::Anchor),
        Some(TokenKind::Alias) => return Some(Category::Alias),
        _ => {}
    }

    if tokens.next_kind(id) == Some(TokenKind::MappingValue) {
        return Some(Category::MapKey);
    }

    match token.kind {
        TokenKind::Bool => Some(Category::Bool),
        TokenKind::Integer | TokenKind::Float => Some(Category::Number),
        TokenKind::Null => Some(Category::Null),
        TokenKind::Anchor => Some(Category::Anchor),
        TokenKind::Alias => Some(Category::Alias),
        kind if kind.is_string_like() => Some(Category::String),
        _ => None,
    }
}

/// One styling step of a [`RenderFunc`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Patches the current style with this one.
    Patch(Style),
    /// Drops all styling from fragments made only of whitespace.
    CleanWhitespace,
}

impl Transform {
    fn apply(&self, style: Style, text: &str) -> Style {
        match self {
            Transform::Patch(patch) => style.patch(*patch),
            Transform::CleanWhitespace if text.chars().all(char::is_whitespace) => Style::default(),
            Transform::CleanWhitespace => style,
        }
    }
}

/// An ordered list of transforms applied left to right to a text fragment.
///
/// The empty function leaves fragments unstyled.
///
/// # Example
///
/// ```
/// use ratatui::style::{Color, Style};
/// use yamlnav::render::{RenderFunc, Transform};
///
/// let func = RenderFunc::new(vec![
///     Transform::Patch(Style::default().bg(Color::Yellow)),
///     Transform::CleanWhitespace,
/// ]);
/// assert_eq!(func.style_for("key").bg, Some(Color::Yellow));
/// assert_eq!(func.style_for("   "), Style::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFunc {
    transforms: Vec<Transform>,
}

impl RenderFunc {
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    /// A render function that styles nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a transform.
    pub fn then(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// The style this function gives `text`.
    pub fn style_for(&self, text: &str) -> Style {
        self.transforms
            .iter()
            .fold(Style::default(), |style, t| t.apply(style, text))
    }

    pub fn render(&self, text: &str) -> Span<'static> {
        Span::styled(text.to_string(), self.style_for(text))
    }
}

/// One render function per [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProperties {
    funcs: [RenderFunc; 8],
    fallback: RenderFunc,
}

impl RenderProperties {
    /// Builds a table where every category patches in `style(category)` and
    /// then cleans whitespace.
    pub fn from_styles(style: impl Fn(Category) -> Style) -> Self {
        let funcs = Category::ALL.map(|category| {
            RenderFunc::new(vec![
                Transform::Patch(style(category)),
                Transform::CleanWhitespace,
            ])
        });
        Self {
            funcs,
            fallback: RenderFunc::empty(),
        }
    }

    /// Syntax colors of `theme`.
    pub fn default_for(theme: &Theme) -> Self {
        let colors = &theme.colors;
        Self::from_styles(|category| {
            let fg = match category {
                Category::MapKey => colors.key,
                Category::Anchor => colors.anchor,
                Category::Alias => colors.alias,
                Category::Bool => colors.boolean,
                Category::String => colors.string,
                Category::Number => colors.number,
                Category::Null => colors.null,
                Category::Indicator => colors.indicator,
            };
            Style::default().fg(fg)
        })
    }

    /// Match highlighting of `theme`, the same for every category.
    pub fn highlighted_for(theme: &Theme) -> Self {
        let style = Style::default()
            .fg(theme.colors.highlight_fg)
            .bg(theme.colors.highlight_bg);
        Self::from_styles(|_| style)
    }

    /// The function for `category`; tokens without a category are unstyled.
    pub fn get(&self, category: Option<Category>) -> &RenderFunc {
        match category {
            Some(category) => &self.funcs[category.index()],
            None => &self.fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::lexer::tokenize;
    use ratatui::style::Color;

    fn categories(src: &str) -> Vec<(String, Option<Category>)> {
        let tokens = tokenize(src);
        tokens
            .entries()
            .map(|(id, t)| (t.text().trim_end().to_string(), categorize(&tokens, id)))
            .collect()
    }

    #[test]
    fn test_categories_of_mapping() {
        assert_eq!(
            categories("a: 1\nb: true\nc: ~\nd: x\n"),
            vec![
                ("a".into(), Some(Category::MapKey)),
                (":".into(), Some(Category::Indicator)),
                ("1".into(), Some(Category::Number)),
                ("b".into(), Some(Category::MapKey)),
                (":".into(), Some(Category::Indicator)),
                ("true".into(), Some(Category::Bool)),
                ("c".into(), Some(Category::MapKey)),
                (":".into(), Some(Category::Indicator)),
                ("~".into(), Some(Category::Null)),
                ("d".into(), Some(Category::MapKey)),
                (":".into(), Some(Category::Indicator)),
                ("x".into(), Some(Category::String)),
            ]
        );
    }

    #[test]
    fn test_anchor_precedes_map_key() {
        let cats = categories("a: &n 1\nb: *n\n");
        assert_eq!(cats[2], ("&".into(), Some(Category::Anchor)));
        assert_eq!(cats[3], ("n".into(), Some(Category::Anchor)));
        assert_eq!(cats[7], ("*".into(), Some(Category::Alias)));
        assert_eq!(cats[8], ("n".into(), Some(Category::Alias)));
    }

    #[test]
    fn test_uncategorized_tokens() {
        let cats = categories("# c\na: !!str 1\n");
        assert_eq!(cats[0].1, None);
        assert_eq!(cats[3], ("!!str".into(), None));
    }

    #[test]
    fn test_indicators() {
        let cats = categories("---\n- [x]\n");
        assert!(cats
            .iter()
            .filter(|(text, _)| text != "x")
            .all(|(_, c)| *c == Some(Category::Indicator)));
    }

    #[test]
    fn test_render_func_applies_in_order() {
        let func = RenderFunc::empty()
            .then(Transform::Patch(Style::default().fg(Color::Red)))
            .then(Transform::Patch(Style::default().fg(Color::Blue)));
        assert_eq!(func.style_for("x").fg, Some(Color::Blue));
        assert_eq!(func.transforms().len(), 2);
    }

    #[test]
    fn test_properties_table() {
        let theme = Theme::default();
        let props = RenderProperties::default_for(&theme);
        assert_eq!(props.get(Some(Category::MapKey)).style_for("k").fg, Some(theme.colors.key));
        assert_eq!(props.get(None).style_for("k"), Style::default());

        let highlighted = RenderProperties::highlighted_for(&theme);
        assert_eq!(
            highlighted.get(Some(Category::Number)).style_for("1").bg,
            Some(theme.colors.highlight_bg)
        );
    }
}
