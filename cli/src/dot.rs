//! Graphviz dot rendering for automata.

use drift_dfa::Dfa;

/// Serialize the automaton as Graphviz dot text.
///
/// Output ordering is deterministic (states by id, edge labels sorted), so
/// the text is stable across runs of the same build. Accepting states are
/// drawn as double circles; when several patterns are multiplexed, each
/// accept node is labeled with the pattern it belongs to. The start state is
/// marked with an arrow from a hidden point node.
pub fn render(dfa: &Dfa) -> String {
    let mut out = String::new();
    out.push_str("digraph dfa {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  entry [shape = point];\n");

    for state in dfa.states() {
        if dfa.is_accepting(state) {
            match dfa.accept_label(state).filter(|_| dfa.pattern_count() > 1) {
                Some(pattern) => out.push_str(&format!(
                    "  {state} [shape = doublecircle, label = \"{state} {pattern}\"];\n"
                )),
                None => out.push_str(&format!("  {state} [shape = doublecircle];\n")),
            }
        } else {
            out.push_str(&format!("  {state} [shape = circle];\n"));
        }
    }

    out.push_str(&format!("  entry -> {};\n", dfa.start()));
    for state in dfa.states() {
        for (symbol, target) in dfa.transitions_from(state) {
            out.push_str(&format!(
                "  {state} -> {target} [label = \"{}\"];\n",
                escape(symbol)
            ));
        }
    }

    out.push_str("}\n");
    out
}

/// Escape a symbol for use inside a double-quoted dot label.
fn escape(symbol: char) -> String {
    match symbol {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        _ => symbol.to_string(),
    }
}
