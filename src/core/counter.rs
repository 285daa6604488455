use crate::config::INPUT_COUNT;
use crate::core::{Console, Parity, Result, Tally};
use crate::utils::error::DrillError;
use crate::utils::validation::parse_integer;

pub fn classify(value: i32) -> Parity {
    Parity::of(value)
}

/// Prompts for and reads exactly [`INPUT_COUNT`] integers.
///
/// Stops at the first line that is not an integer. Nothing is retried.
pub fn read_numbers<C: Console>(console: &mut C) -> Result<[i32; INPUT_COUNT]> {
    console.write_line(&format!("Please enter {} integer numbers:", INPUT_COUNT))?;
    console.write_line(&format!("من فضلك أدخل {} أرقام صحيحة:", INPUT_COUNT))?;

    let mut numbers = [0i32; INPUT_COUNT];
    for (index, slot) in numbers.iter_mut().enumerate() {
        let position = index + 1;
        console.write(&format!("Enter number {}: ", position))?;
        console.flush()?;

        let line = console.read_line()?.ok_or(DrillError::InputExhausted {
            expected: INPUT_COUNT,
            received: index,
        })?;
        *slot = parse_integer(position, &line)?;
        tracing::debug!(position, value = *slot, "Read number");
    }

    Ok(numbers)
}

pub fn render_summary(tally: &Tally) -> String {
    format!(
        "\n===== Results / النتائج =====\n\
         Number of Even numbers: {even}\n\
         عدد الأرقام الزوجية: {even}\n\
         Number of Odd numbers: {odd}\n\
         عدد الأرقام الفردية: {odd}\n",
        even = tally.even,
        odd = tally.odd,
    )
}

pub fn run_counter<C: Console>(console: &mut C) -> Result<Tally> {
    let numbers = read_numbers(console)?;

    let mut tally = Tally::new();
    for &value in &numbers {
        let parity = tally.record(value);
        tracing::debug!(value, ?parity, "Classified");
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(&tally) {
            Ok(json) => tracing::debug!("Tally: {}", json),
            Err(e) => tracing::warn!("Could not serialize tally: {}", e),
        }
    }

    console.write(&render_summary(&tally))?;
    console.flush()?;
    Ok(tally)
}
