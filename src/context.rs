use anyhow::Result;

/// Build metadata sent alongside the screenshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub key: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub build: Option<String>,
    pub job: Option<String>,
    pub os: Option<String>,
    pub rust_version: Option<String>,
    pub url: String,
}

impl RunContext {
    /// Collect the context through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, job_url_base: &str) -> Result<Self> {
        let Some(job_id) = lookup("TRAVIS_JOB_ID") else {
            anyhow::bail!("TRAVIS_JOB_ID is not set; cannot build the job URL");
        };

        Ok(Self {
            key: lookup("UPLOAD_KEY"),
            branch: lookup("TRAVIS_BRANCH"),
            commit: lookup("TRAVIS_COMMIT"),
            build: lookup("TRAVIS_BUILD_NUMBER"),
            job: lookup("TRAVIS_JOB_NUMBER"),
            os: lookup("TRAVIS_OS_NAME"),
            rust_version: lookup("TRAVIS_RUST_VERSION"),
            url: format!("{job_url_base}{job_id}"),
        })
    }

    pub fn from_env(job_url_base: &str) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), job_url_base)
    }

    /// Form fields in wire order. Absent values are left out of the form.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("key", self.key.as_deref()),
            ("branch", self.branch.as_deref()),
            ("commit", self.commit.as_deref()),
            ("build", self.build.as_deref()),
            ("job", self.job.as_deref()),
            ("os", self.os.as_deref()),
            ("rust-version", self.rust_version.as_deref()),
            ("url", Some(self.url.as_str())),
        ]
    }
}
