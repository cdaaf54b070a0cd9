//! Conversion from the typed job document into `aws-sdk-mediaconvert` shapes.
//!
//! Enumerated fields go through the SDK's `From<&str>` impls, so values the SDK
//! does not know yet still reach the service as `Unknown` variants.

use crate::modules::conversion::settings::*;
use aws_sdk_mediaconvert::types as mc;
use std::collections::HashMap;

fn variant<T>(value: &Option<String>) -> Option<T>
where
    T: for<'a> From<&'a str>,
{
    value.as_deref().map(<T as From<&str>>::from)
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

pub fn job_settings(settings: &JobSettings) -> mc::JobSettings {
    mc::JobSettings::builder()
        .set_output_groups(non_empty(settings.output_groups.iter().map(output_group).collect()))
        .set_ad_avail_offset(settings.ad_avail_offset)
        .set_inputs(non_empty(settings.inputs.iter().map(input).collect()))
        .build()
}

fn input(input: &Input) -> mc::Input {
    let audio_selectors: HashMap<String, mc::AudioSelector> = input
        .audio_selectors
        .iter()
        .map(|(name, selector)| (name.clone(), audio_selector(selector)))
        .collect();

    mc::Input::builder()
        .set_audio_selectors((!audio_selectors.is_empty()).then_some(audio_selectors))
        .set_video_selector(input.video_selector.as_ref().map(|selector| {
            mc::VideoSelector::builder()
                .set_color_space(variant(&selector.color_space))
                .build()
        }))
        .set_filter_enable(variant(&input.filter_enable))
        .set_psi_control(variant(&input.psi_control))
        .set_filter_strength(input.filter_strength)
        .set_deblock_filter(variant(&input.deblock_filter))
        .set_denoise_filter(variant(&input.denoise_filter))
        .set_timecode_source(variant(&input.timecode_source))
        .set_file_input(input.file_input.clone())
        .build()
}

fn audio_selector(selector: &AudioSelector) -> mc::AudioSelector {
    mc::AudioSelector::builder()
        .set_offset(selector.offset)
        .set_default_selection(variant(&selector.default_selection))
        .set_program_selection(selector.program_selection)
        .build()
}

fn output_group(group: &OutputGroup) -> mc::OutputGroup {
    mc::OutputGroup::builder()
        .set_custom_name(group.custom_name.clone())
        .set_name(group.name.clone())
        .set_outputs(non_empty(group.outputs.iter().map(output).collect()))
        .set_output_group_settings(group.output_group_settings.as_ref().map(output_group_settings))
        .build()
}

fn output_group_settings(settings: &OutputGroupSettings) -> mc::OutputGroupSettings {
    mc::OutputGroupSettings::builder()
        .set_type(variant(&settings.group_type))
        .set_file_group_settings(settings.file_group_settings.as_ref().map(file_group_settings))
        .build()
}

fn file_group_settings(settings: &FileGroupSettings) -> mc::FileGroupSettings {
    let destination_settings = settings.destination_settings.as_ref().map(|destination| {
        mc::DestinationSettings::builder()
            .set_s3_settings(destination.s3_settings.as_ref().map(|s3| {
                mc::S3DestinationSettings::builder()
                    .set_access_control(s3.access_control.as_ref().map(|acl| {
                        mc::S3DestinationAccessControl::builder()
                            .set_canned_acl(variant(&acl.canned_acl))
                            .build()
                    }))
                    .build()
            }))
            .build()
    });

    mc::FileGroupSettings::builder()
        .set_destination(settings.destination.clone())
        .set_destination_settings(destination_settings)
        .build()
}

fn output(output: &Output) -> mc::Output {
    mc::Output::builder()
        .set_container_settings(output.container_settings.as_ref().map(container_settings))
        .set_video_description(output.video_description.as_ref().map(video_description))
        .set_audio_descriptions(non_empty(
            output.audio_descriptions.iter().map(audio_description).collect(),
        ))
        .build()
}

fn container_settings(settings: &ContainerSettings) -> mc::ContainerSettings {
    mc::ContainerSettings::builder()
        .set_container(variant(&settings.container))
        .set_mp4_settings(settings.mp4_settings.as_ref().map(|mp4| {
            mc::Mp4Settings::builder()
                .set_cslg_atom(variant(&mp4.cslg_atom))
                .set_free_space_box(variant(&mp4.free_space_box))
                .set_moov_placement(variant(&mp4.moov_placement))
                .build()
        }))
        .build()
}

fn video_description(video: &VideoDescription) -> mc::VideoDescription {
    mc::VideoDescription::builder()
        .set_scaling_behavior(variant(&video.scaling_behavior))
        .set_timecode_insertion(variant(&video.timecode_insertion))
        .set_anti_alias(variant(&video.anti_alias))
        .set_sharpness(video.sharpness)
        .set_codec_settings(video.codec_settings.as_ref().map(|codec| {
            mc::VideoCodecSettings::builder()
                .set_codec(variant(&codec.codec))
                .set_h264_settings(codec.h264_settings.as_ref().map(h264_settings))
                .build()
        }))
        .set_afd_signaling(variant(&video.afd_signaling))
        .set_drop_frame_timecode(variant(&video.drop_frame_timecode))
        .set_respond_to_afd(variant(&video.respond_to_afd))
        .set_color_metadata(variant(&video.color_metadata))
        .build()
}

fn h264_settings(h264: &H264Settings) -> mc::H264Settings {
    mc::H264Settings::builder()
        .set_interlace_mode(variant(&h264.interlace_mode))
        .set_number_reference_frames(h264.number_reference_frames)
        .set_syntax(variant(&h264.syntax))
        .set_softness(h264.softness)
        .set_gop_closed_cadence(h264.gop_closed_cadence)
        .set_gop_size(h264.gop_size)
        .set_slices(h264.slices)
        .set_gop_b_reference(variant(&h264.gop_b_reference))
        .set_max_bitrate(h264.max_bitrate)
        .set_slow_pal(variant(&h264.slow_pal))
        .set_spatial_adaptive_quantization(variant(&h264.spatial_adaptive_quantization))
        .set_temporal_adaptive_quantization(variant(&h264.temporal_adaptive_quantization))
        .set_flicker_adaptive_quantization(variant(&h264.flicker_adaptive_quantization))
        .set_entropy_encoding(variant(&h264.entropy_encoding))
        .set_framerate_control(variant(&h264.framerate_control))
        .set_rate_control_mode(variant(&h264.rate_control_mode))
        .set_qvbr_settings(h264.qvbr_settings.as_ref().map(|qvbr| {
            mc::H264QvbrSettings::builder()
                .set_qvbr_quality_level(qvbr.qvbr_quality_level)
                .set_qvbr_quality_level_fine_tune(qvbr.qvbr_quality_level_fine_tune)
                .build()
        }))
        .set_codec_profile(variant(&h264.codec_profile))
        .set_telecine(variant(&h264.telecine))
        .set_min_i_interval(h264.min_i_interval)
        .set_adaptive_quantization(variant(&h264.adaptive_quantization))
        .set_codec_level(variant(&h264.codec_level))
        .set_field_encoding(variant(&h264.field_encoding))
        .set_scene_change_detect(variant(&h264.scene_change_detect))
        .set_quality_tuning_level(variant(&h264.quality_tuning_level))
        .set_framerate_conversion_algorithm(variant(&h264.framerate_conversion_algorithm))
        .set_unregistered_sei_timecode(variant(&h264.unregistered_sei_timecode))
        .set_gop_size_units(variant(&h264.gop_size_units))
        .set_par_control(variant(&h264.par_control))
        .set_number_b_frames_between_reference_frames(h264.number_b_frames_between_reference_frames)
        .set_repeat_pps(variant(&h264.repeat_pps))
        .build()
}

fn audio_description(audio: &AudioDescription) -> mc::AudioDescription {
    mc::AudioDescription::builder()
        .set_audio_type_control(variant(&audio.audio_type_control))
        .set_codec_settings(audio.codec_settings.as_ref().map(|codec| {
            mc::AudioCodecSettings::builder()
                .set_codec(variant(&codec.codec))
                .set_aac_settings(codec.aac_settings.as_ref().map(aac_settings))
                .build()
        }))
        .set_language_code_control(variant(&audio.language_code_control))
        .build()
}

fn aac_settings(aac: &AacSettings) -> mc::AacSettings {
    mc::AacSettings::builder()
        .set_audio_description_broadcaster_mix(variant(&aac.audio_description_broadcaster_mix))
        .set_bitrate(aac.bitrate)
        .set_rate_control_mode(variant(&aac.rate_control_mode))
        .set_codec_profile(variant(&aac.codec_profile))
        .set_coding_mode(variant(&aac.coding_mode))
        .set_raw_format(variant(&aac.raw_format))
        .set_sample_rate(aac.sample_rate)
        .set_specification(variant(&aac.specification))
        .build()
}
