//! Two-pass Wiring generator.
//!
//! Pass one emits the global declarations, pass two the setup routine and
//! the state dispatch loop. Both walk the same model in declaration order;
//! what must be reproducible bit-for-bit is the order of declarations,
//! branches and statements.

use statewire_core::{App, Brick, BrickRef, State, Transition};

use crate::guard::GuardCodegen;

/// Debounce window for sensor transitions, in milliseconds.
const DEBOUNCE_MS: u32 = 200;

/// Hold time of each blink half-period in an error state, in milliseconds.
const BLINK_HOLD_MS: u32 = 200;

/// Pause after a full blink sequence, in milliseconds.
const BLINK_PAUSE_MS: u32 = 800;

/// Generate the complete Wiring program for a validated app.
///
/// Pure and infallible: the same app always yields the same text, and a
/// validated app cannot make rendering fail.
pub fn generate(app: &App) -> String {
    tracing::debug!("generating wiring code for '{}'", app.name());
    let mut out = String::new();
    render_declarations(app, &mut out);
    render_dispatch(app, &mut out);
    out
}

/// Pass 1: header, state enum, current-state variable and per-sensor
/// debounce globals. Actuators contribute nothing here.
fn render_declarations(app: &App, out: &mut String) {
    out.push_str("// Wiring code generated from a Statewire model\n");
    out.push_str(&format!("// Application name: {}\n\n", app.name()));

    out.push_str(&format!("long debounce = {DEBOUNCE_MS};\n"));

    out.push_str("\nenum STATE {");
    for (index, state) in app.states().iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(state.name());
    }
    out.push_str("};\n");

    if let Some(initial) = app.initial() {
        out.push_str(&format!("STATE currentState = {initial};\n"));
    }

    for brick in app.bricks() {
        if let Brick::Sensor { name, .. } = brick {
            out.push_str(&format!("\nboolean {name}BounceGuard = false;\n"));
            out.push_str(&format!("long {name}LastDebounceTime = 0;\n"));
        }
    }
}

/// Pass 2: pin setup followed by the state dispatch loop.
fn render_dispatch(app: &App, out: &mut String) {
    out.push_str("\nvoid setup(){\n");
    for brick in app.bricks() {
        match brick {
            Brick::Sensor { name, pin } => {
                out.push_str(&format!("  pinMode({pin}, INPUT);  // {name} [Sensor]\n"));
            }
            Brick::Actuator { name, pin } => {
                out.push_str(&format!("  pinMode({pin}, OUTPUT); // {name} [Actuator]\n"));
            }
        }
    }
    out.push_str("}\n");

    out.push_str("\nvoid loop() {\n\tswitch(currentState){\n");
    for state in app.states() {
        render_state(state, out);
    }
    out.push_str("\t}\n}\n");
}

/// One dispatch branch: actions, then transitions in declaration order,
/// then (for error states) the blink routine, closed by an explicit break.
fn render_state(state: &State, out: &mut String) {
    out.push_str(&format!("\t\tcase {}:\n", state.name()));

    for action in state.actions() {
        out.push_str(&format!(
            "\t\t\tdigitalWrite({},{});\n",
            action.actuator.pin, action.value
        ));
    }

    for transition in state.transitions() {
        render_transition(transition, out);
    }

    if let State::Error {
        error_code,
        actuator,
        ..
    } = state
    {
        render_blink(*error_code, actuator, out);
    }

    out.push_str("\t\tbreak;\n");
}

fn render_transition(transition: &Transition, out: &mut String) {
    match transition {
        Transition::Signal { guard, target } => {
            out.push_str(&GuardCodegen::bounce_updates(guard));
            out.push_str(&format!("\t\t\tif( {} ) {{\n", GuardCodegen::predicate(guard)));
            out.push_str(&GuardCodegen::timestamp_resets(guard));
            out.push_str(&format!("\t\t\t\tcurrentState = {target};\n"));
            out.push_str("\t\t\t}\n");
        }
        Transition::Time { delay_ms, target } => {
            out.push_str(&format!("\t\t\tdelay({delay_ms});\n"));
            out.push_str(&format!("\t\t\tcurrentState = {target};\n"));
        }
    }
}

/// The terminal blink routine of an error state: `code` high/low pulses
/// with fixed holds, one longer pause, no further transition evaluation.
fn render_blink(code: u8, actuator: &BrickRef, out: &mut String) {
    out.push_str(&format!(
        "\t\t\t// Error state: blink code {code} on pin {}\n",
        actuator.pin
    ));
    out.push_str(&format!("\t\t\tfor (int i = 0; i < {code}; i++) {{\n"));
    out.push_str(&format!("\t\t\t\tdigitalWrite({}, HIGH);\n", actuator.pin));
    out.push_str(&format!("\t\t\t\tdelay({BLINK_HOLD_MS});\n"));
    out.push_str(&format!("\t\t\t\tdigitalWrite({}, LOW);\n", actuator.pin));
    out.push_str(&format!("\t\t\t\tdelay({BLINK_HOLD_MS});\n"));
    out.push_str("\t\t\t}\n");
    out.push_str(&format!("\t\t\tdelay({BLINK_PAUSE_MS});\n"));
}
