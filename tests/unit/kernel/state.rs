use super::*;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

#[test]
fn rename_state_starts_with_cursor_at_end() {
    let rename = RenameState::new(id("3"), "App.jsx");
    assert_eq!(rename.cursor, "App.jsx".len());
    assert!(!rename.select_all);
}

#[test]
fn rename_edits_respect_graphemes() {
    let mut rename = RenameState::new(id("3"), "cafe\u{301}.md");
    assert!(rename.cursor_home());
    assert!(rename.cursor_right());
    assert!(rename.cursor_right());
    assert!(rename.cursor_right());
    assert!(rename.cursor_right());
    assert_eq!(&rename.draft[..rename.cursor], "cafe\u{301}");

    assert!(rename.backspace());
    assert_eq!(rename.draft, "caf.md");
    assert!(rename.delete_forward());
    assert_eq!(rename.draft, "cafmd");
}

#[test]
fn typing_over_select_all_replaces_draft() {
    let mut rename = RenameState::new(id("11"), "newfile.txt");
    assert!(rename.select_all());
    assert!(!rename.select_all());

    rename.insert_char('a');
    rename.insert_char('.');
    rename.insert_char('c');
    assert_eq!(rename.draft, "a.c");
    assert!(!rename.select_all);
}

#[test]
fn backspace_on_select_all_clears_draft() {
    let mut rename = RenameState::new(id("11"), "New Folder");
    rename.select_all();
    assert!(rename.backspace());
    assert!(rename.draft.is_empty());
    assert!(!rename.backspace());
}

#[test]
fn cursor_keys_collapse_selection() {
    let mut rename = RenameState::new(id("1"), "src");
    rename.select_all();
    assert!(rename.cursor_left());
    assert_eq!(rename.cursor, 0);
    assert!(!rename.cursor_left());

    rename.select_all();
    assert!(rename.cursor_right());
    assert_eq!(rename.cursor, 3);
    assert!(!rename.cursor_end());
}

#[test]
fn folder_menu_offers_create_actions() {
    let items = ContextMenuState::items_for(NodeKind::Folder);
    let labels: Vec<_> = items.iter().map(ContextMenuEntry::label).collect();
    assert_eq!(labels, vec!["New File", "New Folder", "", "Rename", "Delete"]);
    assert!(items[2].is_separator());
}

#[test]
fn file_menu_offers_rename_and_delete_only() {
    let items = ContextMenuState::items_for(NodeKind::File);
    assert_eq!(
        items,
        vec![
            ContextMenuEntry::Action(ExplorerMenuAction::Rename),
            ContextMenuEntry::Action(ExplorerMenuAction::Delete),
        ]
    );
}

#[test]
fn menu_selection_skips_separator_and_wraps() {
    let mut menu = ContextMenuState::new(id("1"), NodeKind::Folder, (4, 2));
    assert_eq!(menu.selected_action(), Some(ExplorerMenuAction::NewFile));

    assert!(menu.move_selection(1));
    assert_eq!(menu.selected_action(), Some(ExplorerMenuAction::NewFolder));
    assert!(menu.move_selection(1));
    assert_eq!(menu.selected_action(), Some(ExplorerMenuAction::Rename));
    menu.move_selection(1);
    assert!(menu.move_selection(1));
    assert_eq!(menu.selected_action(), Some(ExplorerMenuAction::NewFile));
    assert!(menu.move_selection(-1));
    assert_eq!(menu.selected_action(), Some(ExplorerMenuAction::Delete));
}

#[test]
fn menu_refuses_selecting_separator() {
    let mut menu = ContextMenuState::new(id("1"), NodeKind::Folder, (0, 0));
    assert!(!menu.set_selected(2));
    assert!(!menu.set_selected(99));
    assert!(menu.set_selected(4));
    assert_eq!(menu.selected_action(), Some(ExplorerMenuAction::Delete));
}

#[test]
fn explorer_rows_follow_seed() {
    let tree = FileTree::seed();
    let explorer = ExplorerState::new(&tree);
    let names: Vec<_> = explorer.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["src", "public", "package.json", "README.md"]);
    assert_eq!(explorer.row_index(&id("9")), Some(2));
    assert_eq!(explorer.row_index(&id("3")), None);
}

#[test]
fn interaction_prefers_editing_over_selection() {
    let tree = FileTree::seed();
    let mut explorer = ExplorerState::new(&tree);
    assert_eq!(explorer.interaction(&id("9")), NodeInteraction::Idle);

    explorer.set_selected(Some(id("9")));
    assert_eq!(explorer.interaction(&id("9")), NodeInteraction::Selected);

    explorer.rename = Some(RenameState::new(id("9"), "package.json"));
    assert_eq!(explorer.interaction(&id("9")), NodeInteraction::Editing);
    assert_eq!(explorer.interaction(&id("10")), NodeInteraction::Idle);
}

#[test]
fn create_parent_uses_selected_folder_only() {
    let tree = FileTree::seed();
    let mut explorer = ExplorerState::new(&tree);
    assert_eq!(explorer.create_parent(&tree), InsertParent::Root);

    explorer.set_selected(Some(id("7")));
    assert_eq!(explorer.create_parent(&tree), InsertParent::Node(id("7")));

    explorer.set_selected(Some(id("9")));
    assert_eq!(explorer.create_parent(&tree), InsertParent::Root);
}

#[test]
fn move_selection_clamps_to_rows() {
    let tree = FileTree::seed();
    let mut explorer = ExplorerState::new(&tree);

    assert!(explorer.move_selection(1));
    assert_eq!(explorer.selected(), Some(&id("1")));
    assert!(!explorer.move_selection(-1));
    assert!(explorer.move_selection(10));
    assert_eq!(explorer.selected(), Some(&id("10")));
}

#[test]
fn selection_scrolls_into_view() {
    let tree = FileTree::seed().toggle(&id("1")).toggle(&id("2"));
    let mut explorer = ExplorerState::new(&tree);
    explorer.set_view_height(3);

    explorer.set_selected(Some(id("6")));
    let index = explorer.row_index(&id("6")).unwrap_or_default();
    assert!(index >= explorer.scroll_offset);
    assert!(index < explorer.scroll_offset + explorer.view_height);

    explorer.set_selected(Some(id("1")));
    assert_eq!(explorer.scroll_offset, 0);
}

#[test]
fn scroll_is_bounded() {
    let tree = FileTree::seed().toggle(&id("1"));
    let mut explorer = ExplorerState::new(&tree);
    explorer.set_view_height(3);

    assert!(!explorer.scroll(-1));
    assert!(explorer.scroll(100));
    assert_eq!(explorer.scroll_offset, explorer.rows.len() - 3);
}

#[test]
fn app_state_defaults() {
    let state = AppState::default();
    assert_eq!(state.ui.focus, FocusTarget::Explorer);
    assert!(!state.ui.should_quit);
    assert_eq!(state.tree.len(), 10);
    assert!(state.explorer.selected().is_none());
    assert_eq!(state.layout.explorer.position(), 30);
}
