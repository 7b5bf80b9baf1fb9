/// Advances the continuous states by one forward Euler step:
///
/// ```text
/// x_{n+1} = x_n + dx_n * dt
/// ```
///
/// This is first order with a fixed step and no error control. Accuracy and
/// stability are traded for predictable cost and the fewest possible calls
/// into the model per step.
pub fn step(states: &mut [f64], derivatives: &[f64], dt: f64) {
    debug_assert_eq!(
        states.len(),
        derivatives.len(),
        "states and derivatives must have the same length"
    );

    for (x, dx) in states.iter_mut().zip(derivatives) {
        *x += dt * dx;
    }
}
