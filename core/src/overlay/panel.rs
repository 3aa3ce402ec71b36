use runecraft_types::Color;

/// A single colored title line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleComponent {
    pub text: String,
    pub color: Color,
}

impl TitleComponent {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Vertical panel of title lines. An empty panel is not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelComponent {
    children: Vec<TitleComponent>,
}

impl PanelComponent {
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn push(&mut self, title: TitleComponent) {
        self.children.push(title);
    }

    pub fn children(&self) -> &[TitleComponent] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
