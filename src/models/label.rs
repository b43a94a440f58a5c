//! 选项标签模块
//!
//! 标签不存储在任何地方，只从选项位置计算得出。
//! 选择记录、判分、展示三处必须共用同一个函数，保证标签永不分叉。

/// 根据选项位置计算标签
///
/// # 参数
/// - `position`: 选项的 0 起始位置
///
/// # 返回
/// 位置 0 返回 'a'，位置 1 返回 'b'，以此类推；超过 'z' 返回 None
pub fn label_for_position(position: usize) -> Option<char> {
    if position < 26 {
        Some((b'a' + position as u8) as char)
    } else {
        None
    }
}

/// 根据标签反查选项位置
///
/// # 参数
/// - `label`: 单字符标签
///
/// # 返回
/// 'a' 返回 0，'b' 返回 1；不是小写字母则返回 None
pub fn position_for_label(label: char) -> Option<usize> {
    if label.is_ascii_lowercase() {
        Some((label as u8 - b'a') as usize)
    } else {
        None
    }
}
