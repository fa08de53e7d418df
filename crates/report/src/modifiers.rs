//! Tone and length guidance appended after the template body

use crate::types::{OutputLength, OutputStyle};

/// Tone guidance for a style
pub fn style_instruction(style: OutputStyle) -> &'static str {
    match style {
        OutputStyle::Stable => "使用稳重、专业的表达方式，强调稳定性和可靠性。",
        OutputStyle::Result => {
            "使用结果导向的表达方式，突出成果和价值，强调\"做了什么\"和\"产生了什么影响\"。"
        }
        OutputStyle::Collaboration => "使用强调协作的表达方式，突出团队合作、跨部门协调和推动力。",
    }
}

/// Length guidance for a length setting
pub fn length_instruction(length: OutputLength) -> &'static str {
    match length {
        OutputLength::Short => "简洁版本，每部分控制在2-3句话。",
        OutputLength::Medium => "标准版本，每部分控制在3-5句话。",
        OutputLength::Long => "详细版本，每部分控制在5-8句话，包含更多细节和背景。",
    }
}
