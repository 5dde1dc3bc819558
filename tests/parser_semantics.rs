use iengine::parser::{parse_document, parse_expr};
use iengine::{Clause, Expr, KnowledgeBase};

fn sym(name: &str) -> Expr {
    Expr::symbol(name)
}

fn single_clause(src: &str) -> Clause {
    let doc = parse_document(&format!("TELL\n{}\nASK\nq\n", src)).expect("parse_document failed");
    assert_eq!(doc.clauses.len(), 1, "expected one clause");
    Clause::new(doc.clauses[0].clone())
}

#[test]
fn test_fact_clause() {
    let clause = single_clause("a;");
    assert!(clause.is_fact());
    assert_eq!(clause.conclusion(), &sym("a"));
}

#[test]
fn test_rule_clause_with_redundant_brackets() {
    let clause = single_clause("((a & b)) => (c);");
    assert_eq!(clause.premise(), Some(&Expr::and(sym("a"), sym("b"))));
    assert_eq!(clause.conclusion(), &sym("c"));
}

#[test]
fn test_biconditional_clause_is_fact() {
    let clause = single_clause("a <=> (c => ~d);");
    assert!(clause.is_fact());
    assert_eq!(
        clause.conclusion(),
        &Expr::equivalent(sym("a"), Expr::implies(sym("c"), Expr::negation(sym("d"))))
    );
}

#[test]
fn test_disjunction_spellings_agree() {
    assert_eq!(parse_expr("a || b").unwrap(), parse_expr("a | b").unwrap());
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(parse_expr("a&b=>c").unwrap(), parse_expr(" a & b  =>  c ").unwrap());
}

#[test]
fn test_markers_are_case_insensitive_and_trimmed() {
    let doc = parse_document("  tell  \na; b;\n Ask\nb\n").expect("parse_document failed");
    assert_eq!(doc.clauses, vec![sym("a"), sym("b")]);
}

#[test]
fn test_display_reparses_to_same_expression() {
    let sources = [
        "a & b => c",
        "~(a || b) <=> c",
        "(a => b) => c",
        "a || b & ~c",
    ];
    for src in sources {
        let expr = parse_expr(src).unwrap();
        assert_eq!(parse_expr(&expr.to_string()).unwrap(), expr, "{}", src);
    }
}

#[test]
fn test_document_builds_ordered_knowledge_base() {
    let doc = parse_document("TELL\np2=> p3; p3 => p1; a;\nb;\nASK\np1\n").unwrap();
    let kb = KnowledgeBase::from_exprs(doc.clauses);
    let conclusions: Vec<String> = kb
        .clauses()
        .iter()
        .map(|c| c.conclusion().to_string())
        .collect();
    assert_eq!(conclusions, vec!["p3", "p1", "a", "b"]);
    assert!(kb.is_horn());
}

#[test]
fn test_text_before_tell_is_error() {
    let err = parse_document("a;\nTELL\nb;\nASK\nb\n").unwrap_err();
    assert_eq!(err.line, 1);
}

#[test]
fn test_second_query_is_error() {
    let err = parse_document("TELL\na;\nASK\na\nb\n").unwrap_err();
    assert_eq!(err.line, 5);
}
