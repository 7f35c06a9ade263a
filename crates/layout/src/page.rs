use crate::elements::PositionedElement;
use log::debug;

/// One laid-out page: positioned text blocks in writing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub index: usize,
    pub width: f32,
    pub height: f32,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Concatenated text of every block, one line per wrapped line.
    pub fn text(&self) -> String {
        self.elements
            .iter()
            .flat_map(|el| el.element.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The vertical write position and the pages written so far.
pub(crate) struct PageCursor {
    top: f32,
    width: f32,
    height: f32,
    y: f32,
    pages: Vec<Page>,
}

impl PageCursor {
    pub(crate) fn new(top: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            width,
            height,
            y: top,
            pages: vec![Page::new(0, width, height)],
        }
    }

    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    pub(crate) fn advance(&mut self, amount: f32) {
        self.y += amount;
    }

    pub(crate) fn new_page(&mut self) {
        let index = self.pages.len();
        debug!("Page break at y={:.1}; starting page {}", self.y, index + 1);
        self.pages.push(Page::new(index, self.width, self.height));
        self.y = self.top;
    }

    pub(crate) fn place(&mut self, element: PositionedElement) {
        // `pages` starts non-empty and only grows.
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    pub(crate) fn finish(self) -> Vec<Page> {
        self.pages
    }
}
