use super::*;

fn press(code: KeyCode) -> Option<Msg> {
    key_to_msg(KeyEvent::new(code, KeyModifiers::NONE))
}

// ============================================================================
// フィルタキー
// ============================================================================

#[test]
fn digit_keys_select_filters() {
    assert_eq!(
        press(KeyCode::Char('1')),
        Some(Msg::SelectFilter(FilterKind::SmallerThanLithuania))
    );
    assert_eq!(
        press(KeyCode::Char('2')),
        Some(Msg::SelectFilter(FilterKind::InOceania))
    );
}

#[test]
fn reset_keys() {
    assert_eq!(press(KeyCode::Char('r')), Some(Msg::ResetFilter));
    assert_eq!(press(KeyCode::Char('0')), Some(Msg::ResetFilter));
}

// ============================================================================
// ページキー
// ============================================================================

#[test]
fn arrow_keys_move_pages() {
    assert_eq!(press(KeyCode::Left), Some(Msg::PrevPage));
    assert_eq!(press(KeyCode::Right), Some(Msg::NextPage));
    assert_eq!(press(KeyCode::Char('h')), Some(Msg::PrevPage));
    assert_eq!(press(KeyCode::Char('l')), Some(Msg::NextPage));
}

#[test]
fn page_up_down_jump_ranges() {
    assert_eq!(press(KeyCode::PageUp), Some(Msg::JumpBackward));
    assert_eq!(press(KeyCode::PageDown), Some(Msg::JumpForward));
}

// ============================================================================
// 終了
// ============================================================================

#[test]
fn quit_keys() {
    assert_eq!(press(KeyCode::Char('q')), Some(Msg::Quit));
    assert_eq!(press(KeyCode::Esc), Some(Msg::Quit));
    assert_eq!(
        key_to_msg(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Msg::Quit)
    );
}

#[test]
fn control_modified_keys_are_not_shortcuts() {
    assert_eq!(
        key_to_msg(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL)),
        None
    );
}

#[test]
fn unknown_key_is_ignored() {
    assert_eq!(press(KeyCode::Char('x')), None);
    assert_eq!(press(KeyCode::Enter), None);
}
