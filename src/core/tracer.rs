use crate::core::{Console, LoopTrace, Result, StepAction, TraceStep};

/// Exclusive upper bound of the loop cursor.
pub const LOOP_BOUND: u32 = 10;
/// Cursors that hit `continue`.
pub const SKIPPED_CURSORS: [u32; 2] = [2, 6];
/// The `i == 4 && i == 8` pair guarding `break`.
pub const BREAK_PAIR: (u32, u32) = (4, 8);
pub const EXPECTED_ANSWER: &str = "01345789";

fn skips(cursor: u32) -> bool {
    cursor == SKIPPED_CURSORS[0] || cursor == SKIPPED_CURSORS[1]
}

// A single cursor can never equal both values, so this is always false.
#[allow(clippy::impossible_comparisons)]
fn breaks(cursor: u32) -> bool {
    cursor == BREAK_PAIR.0 && cursor == BREAK_PAIR.1
}

pub fn trace() -> LoopTrace {
    let mut steps = Vec::with_capacity(LOOP_BOUND as usize);
    for cursor in 0..LOOP_BOUND {
        if skips(cursor) {
            steps.push(TraceStep {
                cursor,
                action: StepAction::Skip,
            });
            continue;
        }
        if breaks(cursor) {
            steps.push(TraceStep {
                cursor,
                action: StepAction::Break,
            });
            break;
        }
        steps.push(TraceStep {
            cursor,
            action: StepAction::Emit,
        });
    }
    LoopTrace { steps }
}

pub fn render_report(trace: &LoopTrace) -> String {
    let mut report = String::new();
    report.push_str("Question 3 - Part 3 Output:\n");
    report.push_str("السؤال 3 - الجزء الثالث - الإخراج:\n\n");
    report.push_str(&trace.digits());
    report.push_str("\n\nExplanation / الشرح:\n");
    report.push_str("- Numbers 2 and 6 are skipped (continue)\n");
    report.push_str("- الأرقام 2 و 6 يتم تخطيها (continue)\n");
    report.push_str("- The break never executes (i cannot be 4 AND 8 at same time)\n");
    report.push_str("- جملة break لن تنفذ أبداً (i لا يمكن أن يساوي 4 و 8 في نفس الوقت)\n");
    report.push_str(&format!("\nAnswer: {}\n", EXPECTED_ANSWER));
    report.push_str(&format!("الإجابة: {}\n", EXPECTED_ANSWER));
    report
}

pub fn run_tracer<C: Console>(console: &mut C) -> Result<LoopTrace> {
    let trace = trace();
    for step in &trace.steps {
        tracing::debug!(cursor = step.cursor, action = ?step.action, "Loop step");
    }
    tracing::debug!(skipped = ?trace.skipped(), "Cursors skipped by continue");

    let digits = trace.digits();
    if digits != EXPECTED_ANSWER {
        tracing::warn!(
            "Trace produced {} but answer line says {}",
            digits,
            EXPECTED_ANSWER
        );
    }

    console.write(&render_report(&trace))?;
    console.flush()?;
    Ok(trace)
}
