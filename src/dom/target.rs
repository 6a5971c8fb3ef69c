// DOM side of ZoomTarget: the zoomed element and the parent it scrolls inside.

use log::warn;
use web_sys::{Element, HtmlElement};

use crate::controller::ZoomTarget;
use crate::error::ZoomError;
use crate::geometry::{ScrollOffset, Size};
use crate::state::{ScrollUpdate, ZoomTransform};

pub struct DomTarget {
    element: HtmlElement,
    parent: Element,
}

impl DomTarget {
    /// # Errors
    ///
    /// Returns `NoParent` if the element is detached or its parent is not an
    /// element.
    pub fn new(element: HtmlElement) -> Result<Self, ZoomError> {
        let parent = element.parent_element().ok_or(ZoomError::NoParent)?;
        Ok(Self { element, parent })
    }
}

impl ZoomTarget for DomTarget {
    fn size(&self) -> Size {
        Size::new(
            f64::from(self.element.offset_width()),
            f64::from(self.element.offset_height()),
        )
    }

    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::new(
            f64::from(self.parent.scroll_left()),
            f64::from(self.parent.scroll_top()),
        )
    }

    fn apply_transform(&self, transform: &ZoomTransform) {
        if let Err(e) = self.element.style().set_property("transform", &transform.to_css()) {
            warn!("failed to set transform: {e:?}");
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scroll_to(&self, update: ScrollUpdate) {
        if let Some(left) = update.left {
            self.parent.set_scroll_left(left.round() as i32);
        }
        if let Some(top) = update.top {
            self.parent.set_scroll_top(top.round() as i32);
        }
    }
}
