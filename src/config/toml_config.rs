use crate::domain::model::FieldKind;
use crate::utils::error::{BoardError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    pub images: Option<ImagesConfig>,
    pub storage: Option<StorageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    pub question_dir: Option<String>,
    pub answer_dir: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

impl BoardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BoardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_path("storage.path", self.storage_path())?;
        validate_path("images.question_dir", self.question_dir())?;
        validate_path("images.answer_dir", self.answer_dir())?;
        validate_non_empty_string("images.extension", self.image_extension())?;
        Ok(())
    }

    pub fn storage_path(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|s| s.path.as_deref())
            .unwrap_or("./state")
    }

    pub fn question_dir(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|i| i.question_dir.as_deref())
            .unwrap_or("images/questions")
    }

    pub fn answer_dir(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|i| i.answer_dir.as_deref())
            .unwrap_or("images/answers")
    }

    pub fn image_extension(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|i| i.extension.as_deref())
            .unwrap_or("png")
    }

    /// Resolves an `<img>` key to a concrete path. Question and answer
    /// fields use distinct directories; the extension is fixed by config.
    pub fn image_path(&self, key: &str, kind: FieldKind) -> PathBuf {
        let dir = match kind {
            FieldKind::Question => self.question_dir(),
            FieldKind::Answer => self.answer_dir(),
        };
        Path::new(dir).join(format!("{}.{}", key, self.image_extension()))
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
