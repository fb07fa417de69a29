//! Tests for GenealogyService (sample family use case)

use famtree::application::services::GenealogyService;
use famtree::domain::ValidationPolicy;
use famtree::util::testing;
use rstest::rstest;

const SAMPLE_OUTPUT: &str = "\
Avô (1945-01-01, M)
├── Pai (1970-06-15, M)
│   ├── Filho (1995-03-10, M)
│   └── Filha (1998-11-05, F)
└── Tia (1972-09-20, F)
";

#[rstest]
#[case(ValidationPolicy::Lenient)]
#[case(ValidationPolicy::strict())]
fn given_policy_when_showing_sample_then_renders_expected_tree(#[case] policy: ValidationPolicy) {
    testing::init_test_setup();
    let service = GenealogyService::new(policy);

    let rendered = service.show_sample().unwrap();

    assert_eq!(rendered, SAMPLE_OUTPUT);
}

#[rstest]
fn given_sample_tree_when_built_then_has_five_persons_under_single_root() {
    let service = GenealogyService::new(ValidationPolicy::Lenient);

    let sample = service.sample_tree().unwrap();

    assert_eq!(sample.created, 5);
    assert_eq!(sample.tree.len(), 5);
    assert_eq!(sample.tree.roots(), vec![sample.root]);
    assert_eq!(sample.tree.person(sample.root).unwrap().name, "Avô");
}

#[rstest]
fn given_sample_tree_when_rendering_and_releasing_then_arena_empty() {
    let service = GenealogyService::new(ValidationPolicy::Lenient);
    let mut sample = service.sample_tree().unwrap();

    let rendered = service
        .render_and_release(&mut sample.tree, sample.root, sample.created)
        .unwrap();

    assert_eq!(rendered, SAMPLE_OUTPUT);
    assert!(sample.tree.is_empty());
}

#[rstest]
fn given_strict_policy_with_foreign_date_format_when_building_sample_then_fails() {
    let service = GenealogyService::new(ValidationPolicy::Strict {
        date_format: "%d/%m/%Y".to_string(),
    });

    let err = service.show_sample().unwrap_err();

    assert!(err.to_string().contains("1945-01-01"), "unexpected error: {err}");
}
