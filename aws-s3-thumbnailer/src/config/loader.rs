/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_types::SdkConfig;
use image::imageops::FilterType;

use crate::config::Builder;
use crate::types::NamingConvention;
use crate::Config;

/// Load thumbnailer [`Config`] from the environment.
///
/// Region and credentials are resolved by the AWS SDK default provider chains, which is what
/// the Lambda host injects. Nothing else is read from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    sdk_config: Option<SdkConfig>,
}

impl ConfigLoader {
    /// Maximum width and height of a generated thumbnail.
    ///
    /// Default is 50x50.
    pub fn bounding_box(mut self, max_width: u32, max_height: u32) -> Self {
        self.builder = self.builder.bounding_box(max_width, max_height);
        self
    }

    /// Convention used to derive the destination bucket and key from the source.
    pub fn naming(mut self, naming: NamingConvention) -> Self {
        self.builder = self.builder.naming(naming);
        self
    }

    /// Resampling filter used when resizing.
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.builder = self.builder.filter(filter);
        self
    }

    /// Use an already loaded shared AWS config instead of loading one from the environment.
    pub fn sdk_config(mut self, sdk_config: SdkConfig) -> Self {
        self.sdk_config = Some(sdk_config);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let shared_config = match self.sdk_config {
            Some(sdk_config) => sdk_config,
            None => aws_config::from_env().load().await,
        };
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        self.builder.client(s3_client).build()
    }
}

#[cfg(test)]
mod test {
    use crate::types::{Dimensions, NamingConvention};
    use aws_config::BehaviorVersion;
    use aws_types::region::Region;
    use aws_types::SdkConfig;
    use image::imageops::FilterType;

    #[tokio::test]
    async fn test_load_with_sdk_config() {
        let sdk_config = SdkConfig::builder()
            .region(Region::from_static("us-west-2"))
            .behavior_version(BehaviorVersion::latest())
            .build();

        let config = crate::from_env()
            .sdk_config(sdk_config)
            .bounding_box(64, 32)
            .naming(NamingConvention::new("-thumbs", "small/"))
            .filter(FilterType::Nearest)
            .load()
            .await;

        assert_eq!(Dimensions::new(64, 32), config.bounding_box());
        assert_eq!(&NamingConvention::new("-thumbs", "small/"), config.naming());
        assert_eq!(FilterType::Nearest, config.filter());
        assert!(format!("{:?}", config.store()).contains("S3Store"));
    }
}
