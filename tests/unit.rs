use tree2cmd::{
    build_commands,
    emit_commands,
    extract_entries,
    is_file_name,
    parse_tree,
    Entry,
    PathStack,
    ShellCommand,
};
#[test]
fn test_blank_input_is_empty() {
    assert_eq!(parse_tree(""), "");
    assert_eq!(parse_tree("\n\n"), "");
    assert_eq!(parse_tree("   \n\t\n  \n"), "");
    assert!(extract_entries("  \n").is_empty());
}
#[test]
fn test_file_classification() {
    assert!(is_file_name("package.json"));
    assert!(is_file_name("archive.tar.gz"));
    assert!(is_file_name(".gitignore"));
    assert!(is_file_name("snake_case.d_ts"));
    assert!(!is_file_name("README"));
    assert!(!is_file_name("src"));
    assert!(!is_file_name("node_modules."));
    assert!(!is_file_name("notes.md-draft"));
    assert!(!is_file_name(""));
    assert!(!is_file_name("a.日本"));
    // Known misclassification of a dotted directory name.
    assert!(is_file_name("archive.v2"));
}
#[test]
fn test_depth_is_floor_of_indent_over_three() {
    for spaces in 0..9 {
        let line = format!("{}├─ x.txt", " ".repeat(spaces));
        let entries = extract_entries(&line);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].depth, spaces / 3, "spaces = {}", spaces);
        assert_eq!(entries[0].name, "x.txt");
        assert!(entries[0].is_file);
    }
}
#[test]
fn test_both_connectors_and_root_line() {
    let entries = extract_entries("root\n   ├─  lib  \n   └─main.rs");
    assert_eq!(
        entries,
        vec![
            Entry::new("root", 0, false),
            Entry::new("lib", 1, false),
            Entry::new("main.rs", 1, true),
        ]
    );
}
#[test]
fn test_blank_lines_do_not_affect_depth() {
    let entries = extract_entries("root\n\n      \n   └─ a.txt\n\n");
    assert_eq!(
        entries,
        vec![Entry::new("root", 0, false), Entry::new("a.txt", 1, true)]
    );
}
#[test]
fn test_crlf_input() {
    assert_eq!(
        parse_tree("app\r\n   └─ main.rs\r\n"),
        "mkdir -p app\nmkdir -p app\ntouch app/main.rs"
    );
}
#[test]
fn test_byte_order_mark_is_whitespace() {
    assert_eq!(
        parse_tree("\u{feff}my-project\n   └─ a.txt"),
        "mkdir -p my-project\nmkdir -p my-project\ntouch my-project/a.txt"
    );
    assert_eq!(
        extract_entries("\u{feff}   ├─ x"),
        vec![Entry::new("x", 1, false)]
    );
    assert_eq!(
        extract_entries("root\u{feff}\n\u{feff}\n   └─ b.txt\u{feff}"),
        vec![Entry::new("root", 0, false), Entry::new("b.txt", 1, true)]
    );
}
#[test]
fn test_line_separator_inside_name_is_not_a_connector_line() {
    assert_eq!(
        extract_entries("   ├─ a\rb"),
        vec![Entry::new("├─ a\rb", 0, false)]
    );
    assert_eq!(
        extract_entries("   └─ a\u{2028}b.txt"),
        vec![Entry::new("└─ a\u{2028}b.txt", 0, true)]
    );
}
#[test]
fn test_empty_name_after_connector() {
    let entries = extract_entries("├─");
    assert_eq!(entries, vec![Entry::new("", 0, false)]);
    assert_eq!(build_commands(&entries), "mkdir -p ");
}
#[test]
fn test_unrecognised_prefixes_are_depth_zero() {
    let entries = extract_entries("|-- a.txt\n│  └─ b.txt\n\t└─ c.txt");
    assert_eq!(
        entries,
        vec![
            Entry::new("|-- a.txt", 0, true),
            Entry::new("│  └─ b.txt", 0, true),
            Entry::new("c.txt", 0, true),
        ]
    );
}
#[test]
fn test_path_stack_regression_and_siblings() {
    let mut stack = PathStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.parent_path(), "");
    stack.place(0, "root");
    stack.place(1, "a");
    stack.place(2, "b");
    assert_eq!(stack.as_slice(), ["root", "a", "b"]);
    stack.place(1, "c");
    assert_eq!(stack.as_slice(), ["root", "c"]);
    assert_eq!(stack.full_path(), "root/c");
    assert_eq!(stack.parent_path(), "root");
    stack.place(1, "d");
    assert_eq!(stack.as_slice(), ["root", "d"]);
    stack.place(0, "other");
    assert_eq!(stack.as_slice(), ["other"]);
    assert_eq!(stack.len(), 1);
}
#[test]
fn test_path_stack_depth_jump_appends() {
    let mut stack = PathStack::new();
    stack.place(0, "root");
    stack.place(3, "deep.txt");
    assert_eq!(stack.as_slice(), ["root", "deep.txt"]);
    assert_eq!(
        parse_tree("root\n         └─ deep.txt"),
        "mkdir -p root\ntouch root/deep.txt"
    );
}
#[test]
fn test_depth_sequence_commands() {
    let entries = vec![
        Entry::new("root", 0, false),
        Entry::new("a", 1, false),
        Entry::new("b", 2, false),
        Entry::new("c", 1, false),
        Entry::new("d", 0, false),
    ];
    assert_eq!(
        build_commands(&entries),
        "mkdir -p root\nmkdir -p root/a\nmkdir -p root/a/b\nmkdir -p root/c\nmkdir -p d"
    );
}
#[test]
fn test_no_deduplication() {
    let commands = emit_commands(&extract_entries("dir\n   ├─ a.txt\n   └─ b.txt"));
    assert_eq!(
        commands,
        vec![
            ShellCommand::Mkdir("dir".into()),
            ShellCommand::Mkdir("dir".into()),
            ShellCommand::Touch("dir/a.txt".into()),
            ShellCommand::Mkdir("dir".into()),
            ShellCommand::Touch("dir/b.txt".into()),
        ]
    );
}
#[test]
fn test_scenario_literal_indentation() {
    // Connector lines with no leading spaces sit at depth 0 alongside the root.
    let input = "my-project\n├─ package.json\n├─ src\n   └─ main.ts";
    let depths: Vec<usize> = extract_entries(input).iter().map(|e| e.depth).collect();
    assert_eq!(depths, vec![0, 0, 0, 1]);
    assert_eq!(
        parse_tree(input),
        "mkdir -p my-project\ntouch package.json\nmkdir -p src\nmkdir -p src\ntouch src/main.ts"
    );
}
#[test]
fn test_scenario_indented_under_root() {
    let input = "my-project\n   ├─ package.json\n   ├─ src\n      └─ main.ts";
    let lines: Vec<String> = parse_tree(input).lines().map(String::from).collect();
    assert_eq!(
        lines,
        vec![
            "mkdir -p my-project",
            "mkdir -p my-project",
            "touch my-project/package.json",
            "mkdir -p my-project/src",
            "mkdir -p my-project/src",
            "touch my-project/src/main.ts",
        ]
    );
}
#[test]
fn test_root_only() {
    assert_eq!(parse_tree("my-project"), "mkdir -p my-project");
    assert_eq!(parse_tree("  my-project  \n"), "mkdir -p my-project");
}
#[test]
fn test_top_level_file_has_no_mkdir() {
    assert_eq!(parse_tree("Cargo.toml"), "touch Cargo.toml");
}
#[test]
fn test_every_touch_has_parent_mkdir_before_it() {
    let inputs = [
        "my-project\n├─ package.json\n├─ src\n   └─ main.ts",
        "root\n   ├─ a\n      └─ x.rs\n   └─ b\n      ├─ c\n         └─ y.toml\n      └─ z.md",
        "root\n         └─ deep.txt\n   └─ mid\n      └─ leaf.txt",
        "a.txt\nb\n   └─ c.txt",
    ];
    for input in inputs {
        let commands = emit_commands(&extract_entries(input));
        for (i, command) in commands.iter().enumerate() {
            let ShellCommand::Touch(path) = command else {
                continue;
            };
            let Some((parent, _)) = path.rsplit_once('/') else {
                continue;
            };
            let created = commands[..i].iter().any(|earlier| match earlier {
                ShellCommand::Mkdir(dir) => {
                    dir == parent || dir.starts_with(&format!("{}/", parent))
                }
                ShellCommand::Touch(_) => false,
            });
            assert!(created, "no mkdir before `{}` in {:?}", command, input);
        }
    }
}
#[test]
fn test_shell_command_display() {
    assert_eq!(ShellCommand::Mkdir("a/b".into()).to_string(), "mkdir -p a/b");
    assert_eq!(ShellCommand::Touch("a/b.c".into()).to_string(), "touch a/b.c");
    assert_eq!(ShellCommand::Touch("a/b.c".into()).path(), "a/b.c");
}
