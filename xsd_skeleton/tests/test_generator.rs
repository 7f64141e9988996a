#[cfg(test)]
mod tests {
    use std::fs::{self, ReadDir};
    use std::path::PathBuf;
    use workspace_root::get_workspace_root;
    use xsdskeleton::{
        ChoicePolicy, DocumentNode, RootWrapper, SkeletonConfig, build_skeleton,
        generate_skeleton,
    };

    fn schema_path(directory: &str, filename: &str) -> PathBuf {
        let mut path: PathBuf = get_workspace_root();
        path.push("schemas");
        path.push(directory);
        path.push(filename);

        path
    }

    fn fetch_test_files(directory: &str) -> ReadDir {
        let mut schema_dir: PathBuf = get_workspace_root();
        schema_dir.push("schemas");
        schema_dir.push(directory);

        fs::read_dir(schema_dir).unwrap()
    }

    fn read_file(path: &PathBuf) -> String {
        let message = format!("Could not read file: {}", path.display());
        fs::read_to_string(path).expect(&message)
    }

    fn build(filename: &str, config: &SkeletonConfig) -> DocumentNode {
        let contents = read_file(&schema_path("working", filename));
        build_skeleton(&contents, config).unwrap()
    }

    fn child_names(node: &DocumentNode) -> Vec<&str> {
        node.children().iter().map(|child| child.tag_name()).collect()
    }

    fn check_leaves(node: &DocumentNode) {
        if node.is_leaf() {
            assert_eq!(node.text(), Some(" "), "leaf {}", node.tag_name());
        } else {
            assert_eq!(node.text(), None, "element {}", node.tag_name());
            for child in node.children() {
                check_leaves(child);
            }
        }
    }

    #[test]
    fn test_examples() {
        let files = fetch_test_files("working");

        for file in files {
            let filepath = file.unwrap().path();
            println!("{}", filepath.display());
            let contents = read_file(&filepath);

            let xml = generate_skeleton(&contents, &SkeletonConfig::default());

            match xml {
                Ok(result) => assert!(!result.contains("/>"), "{}", result),
                Err(err) => panic!("{:?}", err),
            }
        }
    }

    #[test]
    fn test_structure_mirrors_schema() {
        let root = build("address.xsd", &SkeletonConfig::default());

        assert_eq!(root.tag_name(), "Root");
        assert_eq!(child_names(&root), vec!["Name", "Address"]);
        let address = root.child("Address").unwrap();
        assert_eq!(child_names(address), vec!["Street", "City"]);
        assert_eq!(root.count_nodes(), 5);
        check_leaves(&root);
    }

    #[test]
    fn test_end_to_end_output() {
        let contents = read_file(&schema_path("working", "address.xsd"));
        let xml = generate_skeleton(&contents, &SkeletonConfig::default()).unwrap();

        let tags: Vec<&str> = xml
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("<?xml"))
            .collect();
        assert_eq!(
            tags,
            vec![
                "<Root>",
                "<Name> </Name>",
                "<Address>",
                "<Street> </Street>",
                "<City> </City>",
                "</Address>",
                "</Root>",
            ]
        );

        let street = xml.lines().find(|line| line.contains("<Street>")).unwrap();
        let address = xml.lines().find(|line| line.contains("<Address>")).unwrap();
        let indent = |line: &str| line.len() - line.trim_start().len();
        assert!(indent(street) > indent(address));
    }

    #[test]
    fn test_choice_emits_every_alternative() {
        let root = build("choice.xsd", &SkeletonConfig::default());

        assert_eq!(
            child_names(&root),
            vec!["Amount", "Card", "Cash", "Iban", "Bic", "Reference"]
        );
        check_leaves(&root);
    }

    #[test]
    fn test_choice_first_branch_policy() {
        let config = SkeletonConfig::default().with_choice_policy(ChoicePolicy::FirstBranch);
        let root = build("choice.xsd", &config);

        assert_eq!(child_names(&root), vec!["Amount", "Card", "Reference"]);
    }

    #[test]
    fn test_named_types_references_and_groups() {
        let root = build("named_types.xsd", &SkeletonConfig::default());

        assert_eq!(root.tag_name(), "Order");
        assert_eq!(
            child_names(&root),
            vec!["Id", "Customer", "Carrier", "Tracking", "Lines"]
        );
        let customer = root.child("Customer").unwrap();
        assert_eq!(child_names(customer), vec!["FirstName", "LastName"]);
        let line = root.child("Lines").unwrap().child("Line").unwrap();
        assert_eq!(child_names(line), vec!["Product", "Quantity"]);
        assert_eq!(root.child("Id").unwrap().text(), Some(" "));
        check_leaves(&root);
    }

    #[test]
    fn test_root_wrapper_collapses() {
        let root = build("root_wrapper.xsd", &SkeletonConfig::default());

        assert_eq!(root.tag_name(), "Declaration");
        assert_eq!(child_names(&root), vec!["Header", "Body"]);
    }

    #[test]
    fn test_root_wrapper_disabled() {
        let config = SkeletonConfig::default().with_root_wrapper(RootWrapper::Disabled);
        let root = build("root_wrapper.xsd", &config);

        assert_eq!(child_names(&root), vec!["Declaration"]);
        let inner = root.child("Declaration").unwrap();
        assert_eq!(child_names(inner), vec!["Header", "Body"]);
    }

    #[test]
    fn test_named_root_wrapper() {
        let config =
            SkeletonConfig::default().with_root_wrapper(RootWrapper::Named("Declaration".into()));
        let root = build("root_wrapper.xsd", &config);

        assert_eq!(root.tag_name(), "Declaration");
        assert_eq!(child_names(&root), vec!["Header", "Body"]);
    }

    #[test]
    fn test_named_wrapper_requires_matching_root() {
        let config =
            SkeletonConfig::default().with_root_wrapper(RootWrapper::Named("Address".into()));
        let root = build("address.xsd", &config);

        assert_eq!(child_names(&root), vec!["Name", "Address"]);
        let address = root.child("Address").unwrap();
        assert_eq!(child_names(address), vec!["Street", "City"]);
    }

    #[test]
    fn test_extension_includes_base_content() {
        let root = build("extension.xsd", &SkeletonConfig::default());

        assert_eq!(root.tag_name(), "Root");
        assert_eq!(child_names(&root), vec!["A", "B"]);
        check_leaves(&root);
    }

    #[test]
    fn test_multi_level_derivation() {
        let root = build("derivation.xsd", &SkeletonConfig::default());

        assert_eq!(child_names(&root), vec!["Book", "Summary", "Extra"]);
        let book = root.child("Book").unwrap();
        assert_eq!(child_names(book), vec!["Id", "Title", "Isbn", "Issn", "Author"]);
        let summary = root.child("Summary").unwrap();
        assert_eq!(child_names(summary), vec!["Id"]);
        assert_eq!(root.child("Extra").unwrap().text(), Some(" "));
        check_leaves(&root);
    }

    #[test]
    fn test_multi_level_derivation_first_branch() {
        let config = SkeletonConfig::default().with_choice_policy(ChoicePolicy::FirstBranch);
        let root = build("derivation.xsd", &config);

        let book = root.child("Book").unwrap();
        assert_eq!(child_names(book), vec!["Id", "Title", "Isbn", "Author"]);
    }

    #[test]
    fn test_empty_complex_type_is_leaf() {
        let root = build("empty_complex.xsd", &SkeletonConfig::default());

        assert_eq!(child_names(&root), vec!["Flag", "Note"]);
        assert_eq!(root.child("Flag").unwrap().text(), Some(" "));
        assert_eq!(root.child("Note").unwrap().text(), Some(" "));
    }

    #[test]
    fn test_root_attributes() {
        let config = SkeletonConfig::default()
            .with_root_attribute("version", "1.0")
            .with_root_attribute("generator", "xsd-skeleton");
        let root = build("address.xsd", &config);

        assert_eq!(
            root.attributes(),
            &[
                ("version".to_string(), "1.0".to_string()),
                ("generator".to_string(), "xsd-skeleton".to_string()),
            ]
        );
        assert!(root.children().iter().all(|child| child.attributes().is_empty()));

        let contents = read_file(&schema_path("working", "address.xsd"));
        let xml = generate_skeleton(&contents, &config).unwrap();
        assert!(xml.contains(r#"<Root version="1.0" generator="xsd-skeleton">"#));
    }
}
