//! Typed MediaConvert job settings.
//!
//! Field names serialize in the PascalCase form used by MediaConvert job JSON,
//! so a template exported from the console or written for the AWS CLI loads as-is.
//! Keys outside this model are rejected instead of dropped, so a template never
//! reaches MediaConvert with parts missing.
//! Enumerated values stay strings; they are validated by the service on submit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct JobSettings {
    #[serde(default)]
    pub output_groups: Vec<OutputGroup>,
    pub ad_avail_offset: Option<i32>,
    #[serde(default)]
    pub inputs: Vec<Input>,
}

impl JobSettings {
    /// Input hole: the first input's `FileInput`.
    pub fn file_input(&self) -> Option<&str> {
        self.inputs.first()?.file_input.as_deref()
    }

    pub fn set_file_input(&mut self, location: String) {
        if self.inputs.is_empty() {
            self.inputs.push(Input::default());
        }
        self.inputs[0].file_input = Some(location);
    }

    /// Output hole: the first output group's file group `Destination`.
    pub fn destination(&self) -> Option<&str> {
        self.output_groups
            .first()?
            .output_group_settings
            .as_ref()?
            .file_group_settings
            .as_ref()?
            .destination
            .as_deref()
    }

    pub fn set_destination(&mut self, location: String) {
        if self.output_groups.is_empty() {
            self.output_groups.push(OutputGroup::default());
        }
        let file_group = self.output_groups[0]
            .output_group_settings
            .get_or_insert_with(OutputGroupSettings::default)
            .file_group_settings
            .get_or_insert_with(FileGroupSettings::default);
        file_group.destination = Some(location);
    }

    /// Resets both holes to unset. Returns `true` if either was filled.
    pub fn clear_locations(&mut self) -> bool {
        let mut cleared = false;
        if let Some(input) = self.inputs.first_mut() {
            cleared |= input.file_input.take().is_some();
        }
        if let Some(file_group) = self
            .output_groups
            .first_mut()
            .and_then(|group| group.output_group_settings.as_mut())
            .and_then(|settings| settings.file_group_settings.as_mut())
        {
            cleared |= file_group.destination.take().is_some();
        }
        cleared
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Input {
    #[serde(default)]
    pub audio_selectors: BTreeMap<String, AudioSelector>,
    pub video_selector: Option<VideoSelector>,
    pub filter_enable: Option<String>,
    pub psi_control: Option<String>,
    pub filter_strength: Option<i32>,
    pub deblock_filter: Option<String>,
    pub denoise_filter: Option<String>,
    pub timecode_source: Option<String>,
    pub file_input: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AudioSelector {
    pub offset: Option<i32>,
    pub default_selection: Option<String>,
    pub program_selection: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VideoSelector {
    pub color_space: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct OutputGroup {
    pub custom_name: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub outputs: Vec<Output>,
    pub output_group_settings: Option<OutputGroupSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct OutputGroupSettings {
    #[serde(rename = "Type")]
    pub group_type: Option<String>,
    pub file_group_settings: Option<FileGroupSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct FileGroupSettings {
    pub destination: Option<String>,
    pub destination_settings: Option<DestinationSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DestinationSettings {
    pub s3_settings: Option<S3DestinationSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3DestinationSettings {
    pub access_control: Option<S3DestinationAccessControl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3DestinationAccessControl {
    pub canned_acl: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Output {
    pub container_settings: Option<ContainerSettings>,
    pub video_description: Option<VideoDescription>,
    #[serde(default)]
    pub audio_descriptions: Vec<AudioDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ContainerSettings {
    pub container: Option<String>,
    pub mp4_settings: Option<Mp4Settings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Mp4Settings {
    pub cslg_atom: Option<String>,
    pub free_space_box: Option<String>,
    pub moov_placement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VideoDescription {
    pub scaling_behavior: Option<String>,
    pub timecode_insertion: Option<String>,
    pub anti_alias: Option<String>,
    pub sharpness: Option<i32>,
    pub codec_settings: Option<VideoCodecSettings>,
    pub afd_signaling: Option<String>,
    pub drop_frame_timecode: Option<String>,
    pub respond_to_afd: Option<String>,
    pub color_metadata: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VideoCodecSettings {
    pub codec: Option<String>,
    pub h264_settings: Option<H264Settings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct H264Settings {
    pub interlace_mode: Option<String>,
    pub number_reference_frames: Option<i32>,
    pub syntax: Option<String>,
    pub softness: Option<i32>,
    pub gop_closed_cadence: Option<i32>,
    pub gop_size: Option<f64>,
    pub slices: Option<i32>,
    pub gop_b_reference: Option<String>,
    pub max_bitrate: Option<i32>,
    pub slow_pal: Option<String>,
    pub spatial_adaptive_quantization: Option<String>,
    pub temporal_adaptive_quantization: Option<String>,
    pub flicker_adaptive_quantization: Option<String>,
    pub entropy_encoding: Option<String>,
    pub framerate_control: Option<String>,
    pub rate_control_mode: Option<String>,
    pub qvbr_settings: Option<H264QvbrSettings>,
    pub codec_profile: Option<String>,
    pub telecine: Option<String>,
    pub min_i_interval: Option<i32>,
    pub adaptive_quantization: Option<String>,
    pub codec_level: Option<String>,
    pub field_encoding: Option<String>,
    pub scene_change_detect: Option<String>,
    pub quality_tuning_level: Option<String>,
    pub framerate_conversion_algorithm: Option<String>,
    pub unregistered_sei_timecode: Option<String>,
    pub gop_size_units: Option<String>,
    pub par_control: Option<String>,
    pub number_b_frames_between_reference_frames: Option<i32>,
    pub repeat_pps: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct H264QvbrSettings {
    pub qvbr_quality_level: Option<i32>,
    pub qvbr_quality_level_fine_tune: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AudioDescription {
    pub audio_type_control: Option<String>,
    pub codec_settings: Option<AudioCodecSettings>,
    pub language_code_control: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AudioCodecSettings {
    pub codec: Option<String>,
    pub aac_settings: Option<AacSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AacSettings {
    pub audio_description_broadcaster_mix: Option<String>,
    pub bitrate: Option<i32>,
    pub rate_control_mode: Option<String>,
    pub codec_profile: Option<String>,
    pub coding_mode: Option<String>,
    pub raw_format: Option<String>,
    pub sample_rate: Option<i32>,
    pub specification: Option<String>,
}
