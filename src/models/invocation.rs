//! # 外部命令调用结果模型
//!
//! 保存一次 `parse` 调用的退出码、标准输出与标准错误。
//!
//! ## 依赖关系
//! - 被 `invoke/executable.rs` 创建
//! - 被 `batch/runner.rs` 使用

/// 一次外部命令调用的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// 实际执行的命令行（用于日志与报错）
    pub command: String,

    /// 退出码；被信号终止时为 `None`
    pub exit_code: Option<i32>,

    /// 捕获的标准输出
    pub stdout: Vec<u8>,

    /// 捕获的标准错误
    pub stderr: Vec<u8>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Invocation {
            command: command.into(),
            exit_code,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    pub fn with_stdout(mut self, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// 退出码为 0 时视为成功
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// 退出状态的可读描述
    pub fn status_text(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_requires_zero_exit() {
        assert!(Invocation::new("boinkmain parse a.boink out", Some(0)).success());
        assert!(!Invocation::new("boinkmain parse a.boink out", Some(1)).success());
        assert!(!Invocation::new("boinkmain parse a.boink out", None).success());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Invocation::new("x", Some(2)).status_text(), "exit code 2");
        assert_eq!(Invocation::new("x", None).status_text(), "terminated by signal");
    }

    #[test]
    fn test_lossy_text() {
        let inv = Invocation::new("x", Some(0))
            .with_stdout(b"Written the parse tree\n".to_vec())
            .with_stderr(vec![0xff, b'!']);
        assert_eq!(inv.stdout_text(), "Written the parse tree\n");
        assert_eq!(inv.stderr_text(), "\u{fffd}!");
    }
}
