use super::*;

fn id(value: &str) -> NodeId {
    NodeId::from(value)
}

fn top_level_names(tree: &FileTree) -> Vec<&str> {
    tree.roots().iter().map(|node| node.name()).collect()
}

#[test]
fn test_seed_tree() {
    let tree = FileTree::seed();
    assert_eq!(
        top_level_names(&tree),
        vec!["src", "public", "package.json", "README.md"]
    );
    assert_eq!(tree.len(), 10);
    assert!(tree.roots().iter().all(|node| !node.is_open()));
    assert_eq!(tree.find(&id("4")).unwrap().name(), "Header.jsx");
}

#[test]
fn test_toggle_flips_only_target_folder() {
    let tree = FileTree::seed();
    let toggled = tree.toggle(&id("2"));

    assert!(toggled.find(&id("2")).unwrap().is_open());
    assert!(!toggled.find(&id("1")).unwrap().is_open());

    let restored = toggled.toggle(&id("2"));
    assert_eq!(restored.roots(), tree.roots());
}

#[test]
fn test_toggle_file_or_unknown_is_noop() {
    let tree = FileTree::seed();

    for target in ["9", "3", "missing"] {
        let next = tree.toggle(&id(target));
        assert_eq!(next.roots().len(), tree.roots().len());
        for (a, b) in next.roots().iter().zip(tree.roots()) {
            assert!(Rc::ptr_eq(a, b));
        }
    }
}

#[test]
fn test_toggle_shares_untouched_subtrees() {
    let tree = FileTree::seed();
    let next = tree.toggle(&id("5"));

    // Path to the target is rebuilt.
    assert!(!Rc::ptr_eq(&next.roots()[0], &tree.roots()[0]));
    // Siblings along the way are shared.
    let before_src = &tree.roots()[0];
    let after_src = &next.roots()[0];
    assert!(Rc::ptr_eq(&after_src.children()[0], &before_src.children()[0]));
    assert!(Rc::ptr_eq(&after_src.children()[2], &before_src.children()[2]));
    // Other top-level subtrees are shared.
    for index in 1..4 {
        assert!(Rc::ptr_eq(&next.roots()[index], &tree.roots()[index]));
    }
}

#[test]
fn test_find_depth_first() {
    let tree = FileTree::seed();
    let found = tree.find(&id("8")).unwrap();
    assert_eq!(found.name(), "index.html");
    assert_eq!(found.kind(), NodeKind::File);
    assert!(tree.find(&id("42")).is_none());
}

#[test]
fn test_insert_file_then_find() {
    let tree = FileTree::seed();
    let (next, new_id) = tree
        .insert(&InsertParent::Node(id("5")), NodeKind::File)
        .unwrap();

    let node = next.find(&new_id).unwrap();
    assert_eq!(node.kind(), NodeKind::File);
    assert_eq!(node.name(), DEFAULT_FILE_NAME);
    assert!(node.children().is_empty());

    let utils = next.find(&id("5")).unwrap();
    assert!(utils.is_open());
    assert_eq!(utils.children().last().unwrap().id(), &new_id);
    assert!(!tree.contains(&new_id));
}

#[test]
fn test_insert_folder_at_root() {
    let tree = FileTree::seed();
    let (next, new_id) = tree.insert(&InsertParent::Root, NodeKind::Folder).unwrap();

    let last = next.roots().last().unwrap();
    assert_eq!(last.id(), &new_id);
    assert_eq!(last.name(), DEFAULT_FOLDER_NAME);
    assert!(last.is_folder());
    assert!(!last.is_open());
    assert!(last.children().is_empty());
    for (a, b) in next.roots().iter().zip(tree.roots()) {
        assert!(Rc::ptr_eq(a, b));
    }
}

#[test]
fn test_insert_under_file_or_unknown_fails() {
    let tree = FileTree::seed();
    assert_eq!(
        tree.insert(&InsertParent::Node(id("9")), NodeKind::File)
            .unwrap_err(),
        FileTreeError::NotFolder
    );
    assert_eq!(
        tree.insert(&InsertParent::Node(id("nope")), NodeKind::Folder)
            .unwrap_err(),
        FileTreeError::InvalidNodeId
    );
}

#[test]
fn test_inserted_ids_are_unique() {
    let mut tree = FileTree::seed();
    for step in 0..25 {
        let parent = if step % 3 == 0 {
            InsertParent::Root
        } else {
            InsertParent::Node(id("1"))
        };
        let kind = if step % 2 == 0 {
            NodeKind::Folder
        } else {
            NodeKind::File
        };
        tree = tree.insert(&parent, kind).unwrap().0;
    }

    let ids = tree.ids();
    let unique: FxHashSet<&NodeId> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 35);
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let tree = FileTree::seed();
    let (tree, first) = tree.insert(&InsertParent::Root, NodeKind::File).unwrap();
    let tree = tree.delete(&first).unwrap();
    let (_, second) = tree.insert(&InsertParent::Root, NodeKind::File).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_allocation_starts_after_largest_numeric_id() {
    let roots = vec![
        Rc::new(Node::file(id("3"), "a")),
        Rc::new(Node::file(id("x9"), "b")),
    ];
    let tree = FileTree::from_nodes(roots).unwrap();
    let (_, new_id) = tree.insert(&InsertParent::Root, NodeKind::File).unwrap();
    assert_eq!(new_id, id("4"));
}

#[test]
fn test_delete_removes_subtree() {
    let tree = FileTree::seed();
    let next = tree.delete(&id("1")).unwrap();

    for gone in ["1", "2", "3", "4", "5", "6"] {
        assert!(next.find(&id(gone)).is_none(), "{gone} still present");
    }
    assert_eq!(top_level_names(&next), vec!["public", "package.json", "README.md"]);
    assert_eq!(next.len(), 4);
}

#[test]
fn test_delete_nested_keeps_siblings_shared() {
    let tree = FileTree::seed();
    let next = tree.delete(&id("3")).unwrap();

    let components = next.find(&id("2")).unwrap();
    assert_eq!(components.children().len(), 1);
    assert_eq!(components.children()[0].name(), "Header.jsx");
    assert!(Rc::ptr_eq(
        &components.children()[0],
        &tree.find(&id("2")).unwrap().children()[1]
    ));
    assert!(Rc::ptr_eq(&next.roots()[1], &tree.roots()[1]));
}

#[test]
fn test_delete_unknown_fails() {
    let tree = FileTree::seed();
    assert_eq!(
        tree.delete(&id("missing")).unwrap_err(),
        FileTreeError::InvalidNodeId
    );
}

#[test]
fn test_rename() {
    let tree = FileTree::seed();
    let next = tree.rename(&id("2"), "widgets").unwrap();

    let node = next.find(&id("2")).unwrap();
    assert_eq!(node.name(), "widgets");
    assert_eq!(node.children(), tree.find(&id("2")).unwrap().children());
    assert_eq!(tree.find(&id("2")).unwrap().name(), "components");
}

#[test]
fn test_rename_keeps_name_as_given() {
    let tree = FileTree::seed();
    let next = tree.rename(&id("9"), "  pkg.json ").unwrap();
    assert_eq!(next.find(&id("9")).unwrap().name(), "  pkg.json ");
}

#[test]
fn test_insert_after_largest_possible_id_wraps() {
    let tree = FileTree::from_specs(vec![NodeSpec {
        id: u64::MAX.to_string(),
        name: "huge.txt".into(),
        kind: NodeKind::File,
        is_open: None,
        children: None,
    }])
    .unwrap();

    let (tree, first) = tree.insert(&InsertParent::Root, NodeKind::File).unwrap();
    assert_eq!(first, id("1"));
    let (tree, second) = tree.insert(&InsertParent::Root, NodeKind::Folder).unwrap();
    assert_eq!(second, id("2"));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_wrapped_ids_skip_taken_ones() {
    let tree = FileTree::from_specs(vec![
        NodeSpec {
            id: "1".into(),
            name: "a".into(),
            kind: NodeKind::File,
            is_open: None,
            children: None,
        },
        NodeSpec {
            id: u64::MAX.to_string(),
            name: "b".into(),
            kind: NodeKind::File,
            is_open: None,
            children: None,
        },
    ])
    .unwrap();

    let (_, created) = tree.insert(&InsertParent::Root, NodeKind::File).unwrap();
    assert_eq!(created, id("2"));
}

#[test]
fn test_rename_rejects_blank_names() {
    let tree = FileTree::seed();
    assert_eq!(tree.rename(&id("9"), "").unwrap_err(), FileTreeError::EmptyName);
    assert_eq!(
        tree.rename(&id("9"), "   ").unwrap_err(),
        FileTreeError::EmptyName
    );
    assert_eq!(tree.find(&id("9")).unwrap().name(), "package.json");
}

#[test]
fn test_rename_unknown_fails() {
    let tree = FileTree::seed();
    assert_eq!(
        tree.rename(&id("missing"), "x").unwrap_err(),
        FileTreeError::InvalidNodeId
    );
}

#[test]
fn test_example_scenario() {
    let tree = FileTree::seed();
    let src = id("1");

    let tree = tree.toggle(&src);
    assert!(tree.find(&src).unwrap().is_open());

    let before = tree.find(&src).unwrap().children().len();
    let (tree, folder_id) = tree
        .insert(&InsertParent::Node(src.clone()), NodeKind::Folder)
        .unwrap();
    let src_node = tree.find(&src).unwrap();
    assert!(src_node.is_open());
    assert_eq!(src_node.children().len(), before + 1);
    let created = tree.find(&folder_id).unwrap();
    assert_eq!(created.name(), "New Folder");
    assert!(!created.is_open());

    let tree = tree.rename(&folder_id, "utils2").unwrap();
    assert_eq!(tree.find(&folder_id).unwrap().name(), "utils2");

    let tree = tree.delete(&folder_id).unwrap();
    let src_node = tree.find(&src).unwrap();
    assert_eq!(src_node.children().len(), before);
    assert!(src_node.children().iter().all(|c| c.id() != &folder_id));
}

#[test]
fn test_is_descendant() {
    let tree = FileTree::seed();
    assert!(tree.is_descendant(&id("1"), &id("3")));
    assert!(!tree.is_descendant(&id("1"), &id("1")));
    assert!(!tree.is_descendant(&id("7"), &id("3")));
}

#[test]
fn test_flatten_for_view() {
    let tree = FileTree::seed();
    let rows = tree.flatten_for_view();
    assert_eq!(rows.len(), 4);
    assert!(rows[0].is_folder());

    let tree = tree.toggle(&id("1")).toggle(&id("2"));
    let rows = tree.flatten_for_view();
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "src",
            "components",
            "App.jsx",
            "Header.jsx",
            "utils",
            "index.js",
            "public",
            "package.json",
            "README.md"
        ]
    );
    assert_eq!(rows[2].depth, 2);
    assert_eq!(rows[4].depth, 1);
}

#[test]
fn test_specs_round_trip_through_json() {
    let json = r#"[
        {"id": "a", "name": "docs", "type": "folder", "isOpen": true, "children": [
            {"id": "b", "name": "guide.md", "type": "file"}
        ]},
        {"id": "7", "name": "Cargo.toml", "type": "file"}
    ]"#;
    let specs: Vec<NodeSpec> = serde_json::from_str(json).unwrap();
    let tree = FileTree::from_specs(specs.clone()).unwrap();

    assert!(tree.find(&id("a")).unwrap().is_open());
    assert_eq!(tree.to_specs(), specs);

    let (_, new_id) = tree.insert(&InsertParent::Root, NodeKind::File).unwrap();
    assert_eq!(new_id, id("8"));
}

#[test]
fn test_specs_reject_invalid_shapes() {
    let duplicate = vec![
        NodeSpec {
            id: "1".into(),
            name: "a".into(),
            kind: NodeKind::File,
            is_open: None,
            children: None,
        },
        NodeSpec {
            id: "1".into(),
            name: "b".into(),
            kind: NodeKind::File,
            is_open: None,
            children: None,
        },
    ];
    assert_eq!(
        FileTree::from_specs(duplicate).unwrap_err(),
        FileTreeError::DuplicateId(id("1"))
    );

    let file_with_children = vec![NodeSpec {
        id: "1".into(),
        name: "a".into(),
        kind: NodeKind::File,
        is_open: None,
        children: Some(vec![NodeSpec {
            id: "2".into(),
            name: "b".into(),
            kind: NodeKind::File,
            is_open: None,
            children: None,
        }]),
    }];
    assert_eq!(
        FileTree::from_specs(file_with_children).unwrap_err(),
        FileTreeError::ChildrenOnFile(id("1"))
    );
}
