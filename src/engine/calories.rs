/// Bars per day needed to close the gap between current intake and a goal.
///
/// Returns 0 when the goal is already met.
pub fn bars_needed(calories_per_bar: f64, daily_goal: f64, current_intake: f64) -> u32 {
    let calories_needed = daily_goal - current_intake;
    if calories_needed <= 0.0 {
        return 0;
    }
    (calories_needed / calories_per_bar).ceil() as u32
}

/// Parse the calculator's text inputs and compute bars needed.
///
/// `None` means "not yet computable": an input is blank or not a finite
/// number, or the bar has no calories and the goal is still open.
pub fn bars_needed_from_input(calories_per_bar: f64, goal: &str, current: &str) -> Option<u32> {
    let goal = parse_calories(goal)?;
    let current = parse_calories(current)?;
    if goal - current <= 0.0 {
        return Some(0);
    }
    if !calories_per_bar.is_finite() || calories_per_bar <= 0.0 {
        return None;
    }
    Some(bars_needed(calories_per_bar, goal, current))
}

fn parse_calories(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
