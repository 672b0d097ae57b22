//! 命令系统：语义命令定义
//!
//! 宿主把按键 / 鼠标事件翻译成 Command，由 `TextEditorCore::apply_command` 执行。
//! 命令只描述意图，不关心具体按键。

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 光标移动 ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,
    /// 指针点击：直接定位到字节偏移
    CursorTo(usize),

    // ==================== 编辑操作 ====================
    InsertChar(char),
    InsertText(String),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    DeleteSelection,

    // ==================== 选择操作 ====================
    ClearSelection,
    SelectAll,
    ExtendSelectionLeft,
    ExtendSelectionRight,
    ExtendSelectionUp,
    ExtendSelectionDown,
    ExtendSelectionLineStart,
    ExtendSelectionLineEnd,
    ExtendSelectionFileStart,
    ExtendSelectionFileEnd,
    ExtendSelectionPageUp,
    ExtendSelectionPageDown,
    DragStart(usize),
    DragTo(usize),
    DragEnd,

    // ==================== 系统操作 ====================
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,

    // ==================== 查找 ====================
    Find,
    FindClose,
    FindNext,
    FindPrev,
    FindToggleCase,
    FindInput(char),
    FindBackspace,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::CursorTo(_) => "cursorTo",
            Command::InsertChar(_) => "insertChar",
            Command::InsertText(_) => "insertText",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::DeleteSelection => "deleteSelection",
            Command::ClearSelection => "clearSelection",
            Command::SelectAll => "selectAll",
            Command::ExtendSelectionLeft => "extendSelectionLeft",
            Command::ExtendSelectionRight => "extendSelectionRight",
            Command::ExtendSelectionUp => "extendSelectionUp",
            Command::ExtendSelectionDown => "extendSelectionDown",
            Command::ExtendSelectionLineStart => "extendSelectionLineStart",
            Command::ExtendSelectionLineEnd => "extendSelectionLineEnd",
            Command::ExtendSelectionFileStart => "extendSelectionFileStart",
            Command::ExtendSelectionFileEnd => "extendSelectionFileEnd",
            Command::ExtendSelectionPageUp => "extendSelectionPageUp",
            Command::ExtendSelectionPageDown => "extendSelectionPageDown",
            Command::DragStart(_) => "dragStart",
            Command::DragTo(_) => "dragTo",
            Command::DragEnd => "dragEnd",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Copy => "copy",
            Command::Cut => "cut",
            Command::Paste => "paste",
            Command::Find => "find",
            Command::FindClose => "findClose",
            Command::FindNext => "findNext",
            Command::FindPrev => "findPrev",
            Command::FindToggleCase => "findToggleCase",
            Command::FindInput(_) => "findInput",
            Command::FindBackspace => "findBackspace",
        }
    }

    /// 按名称解析无参数命令（配置文件 / 键位表使用）
    pub fn from_name(name: &str) -> Option<Command> {
        let command = match name {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "deleteSelection" => Command::DeleteSelection,
            "clearSelection" => Command::ClearSelection,
            "selectAll" => Command::SelectAll,
            "extendSelectionLeft" => Command::ExtendSelectionLeft,
            "extendSelectionRight" => Command::ExtendSelectionRight,
            "extendSelectionUp" => Command::ExtendSelectionUp,
            "extendSelectionDown" => Command::ExtendSelectionDown,
            "extendSelectionLineStart" => Command::ExtendSelectionLineStart,
            "extendSelectionLineEnd" => Command::ExtendSelectionLineEnd,
            "extendSelectionFileStart" => Command::ExtendSelectionFileStart,
            "extendSelectionFileEnd" => Command::ExtendSelectionFileEnd,
            "extendSelectionPageUp" => Command::ExtendSelectionPageUp,
            "extendSelectionPageDown" => Command::ExtendSelectionPageDown,
            "dragEnd" => Command::DragEnd,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "copy" => Command::Copy,
            "cut" => Command::Cut,
            "paste" => Command::Paste,
            "find" => Command::Find,
            "findClose" => Command::FindClose,
            "findNext" => Command::FindNext,
            "findPrev" => Command::FindPrev,
            "findToggleCase" => Command::FindToggleCase,
            "findBackspace" => Command::FindBackspace,
            _ => return None,
        };
        Some(command)
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertText(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
                | Command::DeleteSelection
                | Command::Paste
                | Command::Cut
                | Command::Undo
                | Command::Redo
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorFileStart
                | Command::CursorFileEnd
                | Command::PageUp
                | Command::PageDown
                | Command::CursorTo(_)
        )
    }

    pub fn is_selection_command(&self) -> bool {
        matches!(
            self,
            Command::ClearSelection
                | Command::SelectAll
                | Command::ExtendSelectionLeft
                | Command::ExtendSelectionRight
                | Command::ExtendSelectionUp
                | Command::ExtendSelectionDown
                | Command::ExtendSelectionLineStart
                | Command::ExtendSelectionLineEnd
                | Command::ExtendSelectionFileStart
                | Command::ExtendSelectionFileEnd
                | Command::ExtendSelectionPageUp
                | Command::ExtendSelectionPageDown
                | Command::DragStart(_)
                | Command::DragTo(_)
                | Command::DragEnd
        )
    }

    pub fn is_search_command(&self) -> bool {
        matches!(
            self,
            Command::Find
                | Command::FindClose
                | Command::FindNext
                | Command::FindPrev
                | Command::FindToggleCase
                | Command::FindInput(_)
                | Command::FindBackspace
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
