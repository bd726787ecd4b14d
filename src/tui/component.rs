use super::widgets::RenderableWidget;

/// Core component trait - like React.Component
///
/// Components turn props into an Element tree. They hold no state of their
/// own: everything they show comes in through props.
pub trait Component {
    /// Props type for this component
    type Props;

    /// Render component given props (pure function)
    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in virtual component tree
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn RenderableWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// Nothing to render
    None,
}

impl Element {
    pub fn widget(widget: impl RenderableWidget + 'static) -> Self {
        Self::Widget(Box::new(widget))
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Widget(_) => f.write_str("Widget"),
            Self::Container { children, layout } => f
                .debug_struct("Container")
                .field("layout", layout)
                .field("children", children)
                .finish(),
            Self::None => f.write_str("None"),
        }
    }
}

/// Layout for container elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Ratio(u32, u32),
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_helper() {
        let element = vertical(
            [Constraint::Length(10), Constraint::Min(5)],
            vec![Element::None, Element::None],
        );

        match element {
            Element::Container { children, layout } => {
                assert_eq!(children.len(), 2);
                assert_eq!(
                    layout,
                    ContainerLayout::Vertical(vec![Constraint::Length(10), Constraint::Min(5)])
                );
            }
            _ => panic!("Expected Container element"),
        }
    }
}
