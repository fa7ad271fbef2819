mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the direct parent of the element with the given ID.
pub fn find_parent<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let Content::Children(children) = &root.content else {
        return None;
    };

    if children.iter().any(|c| c.id == id) {
        return Some(root);
    }

    children.iter().find_map(|c| find_parent(c, id))
}

/// Detach a descendant of `root` by ID. The root itself is never removed.
pub fn remove_descendant(root: &mut Element, id: &str) -> Option<Element> {
    let Content::Children(children) = &mut root.content else {
        return None;
    };

    if let Some(pos) = children.iter().position(|c| c.id == id) {
        return Some(children.remove(pos));
    }

    children.iter_mut().find_map(|c| remove_descendant(c, id))
}

/// Count the elements carrying the given ID (ids are expected to be unique).
pub fn count_elements(root: &Element, id: &str) -> usize {
    let own = usize::from(root.id == id);
    match &root.content {
        Content::Children(children) => {
            own + children.iter().map(|c| count_elements(c, id)).sum::<usize>()
        }
        _ => own,
    }
}
