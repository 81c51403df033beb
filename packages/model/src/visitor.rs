use crate::tree::*;

/// Visitor pattern for traversing content trees immutably
///
/// This trait provides default implementations that walk the entire tree in
/// render order. Override specific visit_* methods to perform custom actions
/// on nodes.
pub trait Visitor: Sized {
    fn visit_page(&mut self, page: &Page) {
        walk_page(self, page);
    }

    fn visit_component(&mut self, component: &Component) {
        walk_component(self, component);
    }

    fn visit_field(&mut self, field: &Field) {
        walk_field(self, field);
    }

    fn visit_tab_group(&mut self, tab: &TabGroup) {
        walk_tab_group(self, tab);
    }

    fn visit_hours_entry(&mut self, _entry: &HoursEntry) {
        // Leaf node, no children to walk
    }
}

/// Mutable visitor pattern for transforming content trees
///
/// Similar to Visitor, but provides mutable access to nodes.
/// Use this when you need to modify the tree during traversal.
pub trait VisitorMut: Sized {
    fn visit_page_mut(&mut self, page: &mut Page) {
        walk_page_mut(self, page);
    }

    fn visit_component_mut(&mut self, component: &mut Component) {
        walk_component_mut(self, component);
    }

    fn visit_field_mut(&mut self, field: &mut Field) {
        walk_field_mut(self, field);
    }

    fn visit_tab_group_mut(&mut self, tab: &mut TabGroup) {
        walk_tab_group_mut(self, tab);
    }

    fn visit_hours_entry_mut(&mut self, _entry: &mut HoursEntry) {
        // Leaf node, no children to walk
    }
}

// Default walk implementations for immutable visitor

pub fn walk_page<V: Visitor>(visitor: &mut V, page: &Page) {
    for component in &page.components {
        visitor.visit_component(component);
    }
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &Component) {
    for field in &component.items {
        visitor.visit_field(field);
    }
}

pub fn walk_field<V: Visitor>(visitor: &mut V, field: &Field) {
    for child in &field.items {
        visitor.visit_field(child);
    }
    for tab in &field.tabs {
        visitor.visit_tab_group(tab);
    }
    for entry in &field.hours {
        visitor.visit_hours_entry(entry);
    }
}

pub fn walk_tab_group<V: Visitor>(visitor: &mut V, tab: &TabGroup) {
    for field in &tab.content {
        visitor.visit_field(field);
    }
}

// Default walk implementations for mutable visitor

pub fn walk_page_mut<V: VisitorMut>(visitor: &mut V, page: &mut Page) {
    for component in &mut page.components {
        visitor.visit_component_mut(component);
    }
}

pub fn walk_component_mut<V: VisitorMut>(visitor: &mut V, component: &mut Component) {
    for field in &mut component.items {
        visitor.visit_field_mut(field);
    }
}

pub fn walk_field_mut<V: VisitorMut>(visitor: &mut V, field: &mut Field) {
    for child in &mut field.items {
        visitor.visit_field_mut(child);
    }
    for tab in &mut field.tabs {
        visitor.visit_tab_group_mut(tab);
    }
    for entry in &mut field.hours {
        visitor.visit_hours_entry_mut(entry);
    }
}

pub fn walk_tab_group_mut<V: VisitorMut>(visitor: &mut V, tab: &mut TabGroup) {
    for field in &mut tab.content {
        visitor.visit_field_mut(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TextCollector {
        texts: Vec<String>,
    }

    impl Visitor for TextCollector {
        fn visit_field(&mut self, field: &Field) {
            if let Some(content) = &field.content {
                self.texts.push(content.clone());
            }
            walk_field(self, field);
        }
    }

    #[test]
    fn test_visitor_reaches_nested_and_tab_fields() {
        let page = Page::new(vec![Component::new("about", "aboutSection")
            .with_item(
                Field::text("intro", "Who we are")
                    .with_item(Field::text("detail", "Since 1998")),
            )
            .with_item(Field::new("panels", "tabs").with_tab(TabGroup::new(
                "Menu",
                vec![Field::text("dish", "Soup of the day")],
            )))]);

        let mut collector = TextCollector { texts: Vec::new() };
        collector.visit_page(&page);

        assert_eq!(collector.texts, vec!["Who we are", "Since 1998", "Soup of the day"]);
    }

    struct UpperCaser;

    impl VisitorMut for UpperCaser {
        fn visit_field_mut(&mut self, field: &mut Field) {
            if let Some(content) = &mut field.content {
                *content = content.to_uppercase();
            }
            walk_field_mut(self, field);
        }
    }

    #[test]
    fn test_mutable_visitor_rewrites_leaves() {
        let mut page = Page::new(vec![
            Component::new("hero", "heroSection").with_item(Field::text("headline", "hello"))
        ]);

        UpperCaser.visit_page_mut(&mut page);

        assert_eq!(
            page.components[0].items[0].content.as_deref(),
            Some("HELLO")
        );
    }
}
