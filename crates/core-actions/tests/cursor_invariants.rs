mod common;
use common::*;

use core_actions::ModeController;
use proptest::prelude::*;

const ALPHABET: &[u8] = b"hjkl0$wbgGxXdioaOZ \r\x1b\x7f\x04\x15abc";

proptest! {
    #[test]
    fn cursor_stays_clamped_and_visible(
        keys in proptest::collection::vec(proptest::sample::select(ALPHABET), 0..200),
    ) {
        let mut model = model_from(&["alpha beta", "", "gamma.delta", "x"]);
        let mut ctl = ModeController::new();
        for k in keys {
            ctl.handle(k, &mut model);
            let doc = &model.state().document;
            let view = model.view();
            let cur = view.cursor;
            prop_assert!(cur.row <= doc.row_count());
            prop_assert!(cur.col <= doc.row_len(cur.row));
            prop_assert!(view.row_offset <= cur.row && cur.row < view.row_offset + view.height);
            prop_assert!(view.col_offset <= cur.col && cur.col < view.col_offset + view.width);
            for row in doc.rows() {
                prop_assert!(!row.as_bytes().contains(&b'\n'));
                prop_assert!(!row.as_bytes().contains(&b'\r'));
            }
        }
    }
}
