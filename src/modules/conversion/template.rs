use super::error::ConversionError;
use super::settings::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Source of the base job document a `MediaConverter` starts from.
///
/// Every call must hand out an independent document with both locations unset.
pub trait JobSettingsTemplate: Send + Sync {
    fn get(&self) -> JobSettings;
}

/// Picks the template file when one is configured, the built-in profile otherwise.
pub fn from_config(path: Option<&str>) -> Result<Arc<dyn JobSettingsTemplate>, ConversionError> {
    match path {
        Some(path) => Ok(Arc::new(FileJobSettings::load(path)?)),
        None => Ok(Arc::new(DefaultJobSettings)),
    }
}

/// A template read from a MediaConvert job settings JSON file at startup.
#[derive(Debug, Clone)]
pub struct FileJobSettings {
    settings: JobSettings,
}

impl FileJobSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConversionError> {
        let path = path.as_ref();
        let template_error = |reason: String| ConversionError::Template {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| template_error(e.to_string()))?;
        let settings: JobSettings =
            serde_json::from_str(&raw).map_err(|e| template_error(e.to_string()))?;

        let settings = Self::from_settings(settings);
        info!("Loaded job settings template from {}", path.display());
        Ok(settings)
    }

    pub fn from_settings(mut settings: JobSettings) -> Self {
        if settings.clear_locations() {
            warn!("Job settings template had input/destination locations filled in; they were cleared");
        }
        Self { settings }
    }
}

impl JobSettingsTemplate for FileJobSettings {
    fn get(&self) -> JobSettings {
        self.settings.clone()
    }
}

/// Progressive-download MP4: H.264 QVBR video with a single AAC stereo track.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultJobSettings;

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl JobSettingsTemplate for DefaultJobSettings {
    fn get(&self) -> JobSettings {
        JobSettings {
            output_groups: vec![OutputGroup {
                custom_name: text("MP4"),
                name: text("File Group"),
                outputs: vec![Output {
                    container_settings: Some(ContainerSettings {
                        container: text("MP4"),
                        mp4_settings: Some(Mp4Settings {
                            cslg_atom: text("INCLUDE"),
                            free_space_box: text("EXCLUDE"),
                            moov_placement: text("PROGRESSIVE_DOWNLOAD"),
                        }),
                    }),
                    video_description: Some(VideoDescription {
                        scaling_behavior: text("DEFAULT"),
                        timecode_insertion: text("DISABLED"),
                        anti_alias: text("ENABLED"),
                        sharpness: Some(50),
                        codec_settings: Some(VideoCodecSettings {
                            codec: text("H_264"),
                            h264_settings: Some(H264Settings {
                                interlace_mode: text("PROGRESSIVE"),
                                number_reference_frames: Some(3),
                                syntax: text("DEFAULT"),
                                softness: Some(0),
                                gop_closed_cadence: Some(1),
                                gop_size: Some(90.0),
                                slices: Some(1),
                                gop_b_reference: text("DISABLED"),
                                max_bitrate: Some(8_000_000),
                                slow_pal: text("DISABLED"),
                                spatial_adaptive_quantization: text("ENABLED"),
                                temporal_adaptive_quantization: text("ENABLED"),
                                flicker_adaptive_quantization: text("DISABLED"),
                                entropy_encoding: text("CABAC"),
                                framerate_control: text("INITIALIZE_FROM_SOURCE"),
                                rate_control_mode: text("QVBR"),
                                qvbr_settings: Some(H264QvbrSettings {
                                    qvbr_quality_level: Some(7),
                                    qvbr_quality_level_fine_tune: Some(0.0),
                                }),
                                codec_profile: text("MAIN"),
                                telecine: text("NONE"),
                                min_i_interval: Some(0),
                                adaptive_quantization: text("HIGH"),
                                codec_level: text("AUTO"),
                                field_encoding: text("PAFF"),
                                scene_change_detect: text("ENABLED"),
                                quality_tuning_level: text("SINGLE_PASS"),
                                framerate_conversion_algorithm: text("DUPLICATE_DROP"),
                                unregistered_sei_timecode: text("DISABLED"),
                                gop_size_units: text("FRAMES"),
                                par_control: text("INITIALIZE_FROM_SOURCE"),
                                number_b_frames_between_reference_frames: Some(2),
                                repeat_pps: text("DISABLED"),
                            }),
                        }),
                        afd_signaling: text("NONE"),
                        drop_frame_timecode: text("ENABLED"),
                        respond_to_afd: text("NONE"),
                        color_metadata: text("INSERT"),
                    }),
                    audio_descriptions: vec![AudioDescription {
                        audio_type_control: text("FOLLOW_INPUT"),
                        codec_settings: Some(AudioCodecSettings {
                            codec: text("AAC"),
                            aac_settings: Some(AacSettings {
                                audio_description_broadcaster_mix: text("NORMAL"),
                                bitrate: Some(96_000),
                                rate_control_mode: text("CBR"),
                                codec_profile: text("LC"),
                                coding_mode: text("CODING_MODE_2_0"),
                                raw_format: text("NONE"),
                                sample_rate: Some(48_000),
                                specification: text("MPEG4"),
                            }),
                        }),
                        language_code_control: text("FOLLOW_INPUT"),
                    }],
                }],
                output_group_settings: Some(OutputGroupSettings {
                    group_type: text("FILE_GROUP_SETTINGS"),
                    file_group_settings: Some(FileGroupSettings {
                        destination: None,
                        destination_settings: Some(DestinationSettings {
                            s3_settings: Some(S3DestinationSettings {
                                access_control: Some(S3DestinationAccessControl {
                                    canned_acl: text("PUBLIC_READ"),
                                }),
                            }),
                        }),
                    }),
                }),
            }],
            ad_avail_offset: Some(0),
            inputs: vec![Input {
                audio_selectors: BTreeMap::from([(
                    "Audio Selector 1".to_string(),
                    AudioSelector {
                        offset: Some(0),
                        default_selection: text("DEFAULT"),
                        program_selection: Some(1),
                    },
                )]),
                video_selector: Some(VideoSelector {
                    color_space: text("FOLLOW"),
                }),
                filter_enable: text("AUTO"),
                psi_control: text("USE_PSI"),
                filter_strength: Some(0),
                deblock_filter: text("DISABLED"),
                denoise_filter: text("DISABLED"),
                timecode_source: text("EMBEDDED"),
                file_input: None,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_leaves_both_locations_unset() {
        let settings = DefaultJobSettings.get();

        assert_eq!(settings.file_input(), None);
        assert_eq!(settings.destination(), None);
    }

    #[test]
    fn instantiations_are_independent() {
        let template = DefaultJobSettings;
        let mut first = template.get();
        let second = template.get();

        first.set_file_input("s3://media/a.mp4".to_string());
        first.output_groups[0].name = text("Changed");

        assert_eq!(second.file_input(), None);
        assert_eq!(second.output_groups[0].name.as_deref(), Some("File Group"));
        assert_eq!(second, template.get());
    }

    #[test]
    fn default_profile_survives_a_json_round_trip_through_the_file_format() {
        let json = serde_json::to_string(&DefaultJobSettings.get()).unwrap();
        let reloaded: JobSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded, DefaultJobSettings.get());
        assert!(json.contains("\"FileInput\":null"));
        assert!(json.contains("\"Destination\":null"));
    }

    #[test]
    fn file_template_clears_filled_locations_and_clones_on_get() {
        let mut settings = DefaultJobSettings.get();
        settings.set_file_input("s3://stale/input.mov".to_string());
        settings.set_destination("s3://stale/output/".to_string());

        let template = FileJobSettings::from_settings(settings);
        let mut first = template.get();
        first.set_file_input("s3://media/new.mov".to_string());

        assert_eq!(template.get().file_input(), None);
        assert_eq!(template.get().destination(), None);
        assert_eq!(template.get(), DefaultJobSettings.get());
    }

    #[test]
    fn loading_a_missing_template_file_fails() {
        let err = FileJobSettings::load("/nonexistent/job-settings.json").unwrap_err();

        assert!(matches!(err, ConversionError::Template { .. }));
    }

    #[test]
    fn template_with_unmodelled_fields_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "media-converter-hls-template-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"OutputGroups":[{"Outputs":[{"NameModifier":"_720p"}],"OutputGroupSettings":{"Type":"HLS_GROUP_SETTINGS","HlsGroupSettings":{"SegmentLength":6}}}]}"#,
        )
        .unwrap();

        let result = FileJobSettings::load(&path);
        std::fs::remove_file(&path).ok();

        match result {
            Err(ConversionError::Template { reason, .. }) => assert!(reason.contains("unknown field")),
            other => panic!("expected template error, got {other:?}"),
        }
    }

    #[test]
    fn loads_template_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "media-converter-template-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"Inputs":[{"FileInput":"s3://old/in.mov","TimecodeSource":"ZEROBASED"}]}"#,
        )
        .unwrap();

        let template = from_config(path.to_str()).unwrap();
        let settings = template.get();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.file_input(), None);
        assert_eq!(settings.inputs[0].timecode_source.as_deref(), Some("ZEROBASED"));
    }
}
