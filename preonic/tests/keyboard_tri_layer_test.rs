mod common;

use preonic::event::KeyEvent;
use preonic::types::layer::Layer;

use crate::common::create_test_keyboard;

#[derive(Debug, Clone, Copy)]
enum Op {
    Activate(Layer),
    Deactivate(Layer),
}

const OPS: [Op; 4] = [
    Op::Activate(Layer::Numeric),
    Op::Deactivate(Layer::Numeric),
    Op::Activate(Layer::Symbol),
    Op::Deactivate(Layer::Symbol),
];

/// Decode `seq` as a base-4 list of `len` operations
fn ops(mut seq: usize, len: usize) -> impl Iterator<Item = Op> {
    (0..len).map(move |_| {
        let op = OPS[seq % OPS.len()];
        seq /= OPS.len();
        op
    })
}

#[test]
fn test_tri_layer_over_all_sequences() {
    for len in 1..=6 {
        for seq in 0..OPS.len().pow(len as u32) {
            let mut keyboard = create_test_keyboard();
            for op in ops(seq, len) {
                match op {
                    Op::Activate(layer) => keyboard.keymap.activate_layer(layer),
                    Op::Deactivate(layer) => keyboard.keymap.deactivate_layer(layer),
                }
                let keymap = &keyboard.keymap;
                assert_eq!(
                    keymap.is_layer_active(Layer::Adjust),
                    keymap.is_layer_active(Layer::Numeric) && keymap.is_layer_active(Layer::Symbol),
                    "after {:?} in {:?}",
                    op,
                    ops(seq, len).collect::<Vec<_>>()
                );
            }
        }
    }
}

#[test]
fn test_tri_layer_with_keys() {
    let mut keyboard = create_test_keyboard();

    keyboard.process_key_event(KeyEvent::press(4, 4));
    keyboard.process_key_event(KeyEvent::press(4, 7));
    assert!(keyboard.keymap.is_layer_active(Layer::Adjust));
    assert_eq!(keyboard.keymap.get_activated_layer(), Layer::Adjust);
    assert_eq!(keyboard.keymap.resolve(0, 0), preonic::k!(F1));

    keyboard.process_key_event(KeyEvent::release(4, 4));
    assert!(!keyboard.keymap.is_layer_active(Layer::Adjust));
    assert_eq!(keyboard.keymap.get_activated_layer(), Layer::Symbol);

    keyboard.process_key_event(KeyEvent::release(4, 7));
    assert_eq!(keyboard.keymap.get_activated_layer(), Layer::Qwerty);
}

#[test]
fn test_dip_switch_adjust_is_recomputed_by_triggers() {
    let mut keyboard = create_test_keyboard();

    keyboard.dip_switch_update(0, true);
    keyboard.keymap.activate_layer(Layer::Gui);
    keyboard.keymap.deactivate_layer(Layer::Gui);
    assert!(keyboard.keymap.is_layer_active(Layer::Adjust));

    // A trigger layer change brings adjust back in line with the triggers
    keyboard.keymap.activate_layer(Layer::Numeric);
    assert!(!keyboard.keymap.is_layer_active(Layer::Adjust));
}
