use rustpython_parser::ast::{self, Expr};

/// Outcome of matching one dotted-path segment against an expression.
enum SegmentStep<'a> {
    /// The segment matched an attribute access; continue with its owner.
    Descend(&'a Expr),
    NoMatch,
}

/// Calls are transparent wherever a name or attribute is expected, so a
/// chain like `f().g()` matches through each callee.
fn unwrap_chained_call(expr: &Expr) -> &Expr {
    match expr {
        Expr::Call(ast::ExprCall { func, .. }) => func,
        other => other,
    }
}

fn step_attribute<'a>(expr: &'a Expr, expected: &str) -> SegmentStep<'a> {
    match unwrap_chained_call(expr) {
        Expr::Attribute(ast::ExprAttribute { value, attr, .. }) if attr.as_str() == expected => {
            SegmentStep::Descend(value)
        }
        _ => SegmentStep::NoMatch,
    }
}

fn step_root(expr: &Expr, expected: &str) -> bool {
    matches!(
        unwrap_chained_call(expr),
        Expr::Name(ast::ExprName { id, .. }) if id.as_str() == expected
    )
}

/// Returns true if `call` looks like an invocation of `dotted_name`.
///
/// Matches purely on the shape of the callee: `dotted_name` `"a.b.c"`
/// matches `a.b.c()` and the chained form `a().b().c()`. No inference or
/// import resolution happens, so an aliased import (`import foo as bar;
/// bar.call()`) will not match `"foo.call"`.
///
/// Unexpected callee shapes are never an error; they simply do not match.
pub fn matches_call(call: &ast::ExprCall, dotted_name: &str) -> bool {
    let mut segments = dotted_name.split('.');
    let Some(root) = segments.next() else {
        return false;
    };
    let attrs: Vec<&str> = segments.collect();

    // Walk the callee outside-in, checking the rightmost segment first.
    let mut current: &Expr = &call.func;
    for expected in attrs.iter().rev() {
        current = match step_attribute(current, expected) {
            SegmentStep::Descend(value) => value,
            SegmentStep::NoMatch => return false,
        };
    }
    step_root(current, root)
}
