#![allow(missing_docs)]

pub const CL_SUCCESS: i32 = 0;
pub const CL_INVALID_VALUE: i32 = -30;

/* PLATFORM */
pub const CL_PLATFORM_PROFILE: u32 = 0x0900;
pub const CL_PLATFORM_VERSION: u32 = 0x0901;
pub const CL_PLATFORM_NAME: u32 = 0x0902;
pub const CL_PLATFORM_VENDOR: u32 = 0x0903;
pub const CL_PLATFORM_EXTENSIONS: u32 = 0x0904;

/* DEVICE */
pub const CL_DEVICE_TYPE: u32 = 0x1000;
pub const CL_DEVICE_MAX_COMPUTE_UNITS: u32 = 0x1002;
pub const CL_DEVICE_GLOBAL_MEM_SIZE: u32 = 0x101F;
pub const CL_DEVICE_NAME: u32 = 0x102B;
pub const CL_DEVICE_VENDOR: u32 = 0x102C;
pub const CL_DRIVER_VERSION: u32 = 0x102D;
pub const CL_DEVICE_PROFILE: u32 = 0x102E;
pub const CL_DEVICE_VERSION: u32 = 0x102F;
pub const CL_DEVICE_EXTENSIONS: u32 = 0x1030;
pub const CL_DEVICE_PLATFORM: u32 = 0x1031;

/* CONTEXT */
pub const CL_CONTEXT_REFERENCE_COUNT: u32 = 0x1080;
pub const CL_CONTEXT_DEVICES: u32 = 0x1081;
pub const CL_CONTEXT_PROPERTIES: u32 = 0x1082;
pub const CL_CONTEXT_NUM_DEVICES: u32 = 0x1083;

/* QUEUE */
pub const CL_QUEUE_CONTEXT: u32 = 0x1090;
pub const CL_QUEUE_DEVICE: u32 = 0x1091;
pub const CL_QUEUE_REFERENCE_COUNT: u32 = 0x1092;
pub const CL_QUEUE_PROPERTIES: u32 = 0x1093;

pub const CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE: u64 = 1 << 0;
pub const CL_QUEUE_PROFILING_ENABLE: u64 = 1 << 1;

/* MEMORY OBJECT */
pub const CL_MEM_READ_WRITE: u64 = 1 << 0;
pub const CL_MEM_WRITE_ONLY: u64 = 1 << 1;
pub const CL_MEM_READ_ONLY: u64 = 1 << 2;
pub const CL_MEM_USE_HOST_PTR: u64 = 1 << 3;
pub const CL_MEM_ALLOC_HOST_PTR: u64 = 1 << 4;
pub const CL_MEM_COPY_HOST_PTR: u64 = 1 << 5;

pub const CL_MEM_TYPE: u32 = 0x1100;
pub const CL_MEM_FLAGS: u32 = 0x1101;
pub const CL_MEM_SIZE: u32 = 0x1102;
pub const CL_MEM_HOST_PTR: u32 = 0x1103;
pub const CL_MEM_MAP_COUNT: u32 = 0x1104;
pub const CL_MEM_REFERENCE_COUNT: u32 = 0x1105;
pub const CL_MEM_CONTEXT: u32 = 0x1106;

pub const CL_MEM_OBJECT_BUFFER: u32 = 0x10F0;
pub const CL_MEM_OBJECT_IMAGE2D: u32 = 0x10F1;
pub const CL_MEM_OBJECT_IMAGE3D: u32 = 0x10F2;
pub const CL_MEM_OBJECT_IMAGE2D_ARRAY: u32 = 0x10F3;
pub const CL_MEM_OBJECT_IMAGE1D: u32 = 0x10F4;
pub const CL_MEM_OBJECT_IMAGE1D_ARRAY: u32 = 0x10F5;
pub const CL_MEM_OBJECT_IMAGE1D_BUFFER: u32 = 0x10F6;

/* IMAGE */
pub const CL_IMAGE_FORMAT: u32 = 0x1110;
pub const CL_IMAGE_ELEMENT_SIZE: u32 = 0x1111;
pub const CL_IMAGE_ROW_PITCH: u32 = 0x1112;
pub const CL_IMAGE_SLICE_PITCH: u32 = 0x1113;
pub const CL_IMAGE_WIDTH: u32 = 0x1114;
pub const CL_IMAGE_HEIGHT: u32 = 0x1115;
pub const CL_IMAGE_DEPTH: u32 = 0x1116;

pub const CL_R: u32 = 0x10B0;
pub const CL_A: u32 = 0x10B1;
pub const CL_RG: u32 = 0x10B2;
pub const CL_RA: u32 = 0x10B3;
pub const CL_RGB: u32 = 0x10B4;
pub const CL_RGBA: u32 = 0x10B5;
pub const CL_BGRA: u32 = 0x10B6;
pub const CL_ARGB: u32 = 0x10B7;
pub const CL_INTENSITY: u32 = 0x10B8;
pub const CL_LUMINANCE: u32 = 0x10B9;

pub const CL_SNORM_INT8: u32 = 0x10D0;
pub const CL_SNORM_INT16: u32 = 0x10D1;
pub const CL_UNORM_INT8: u32 = 0x10D2;
pub const CL_UNORM_INT16: u32 = 0x10D3;
pub const CL_UNORM_SHORT_565: u32 = 0x10D4;
pub const CL_UNORM_SHORT_555: u32 = 0x10D5;
pub const CL_UNORM_INT_101010: u32 = 0x10D6;
pub const CL_SIGNED_INT8: u32 = 0x10D7;
pub const CL_SIGNED_INT16: u32 = 0x10D8;
pub const CL_SIGNED_INT32: u32 = 0x10D9;
pub const CL_UNSIGNED_INT8: u32 = 0x10DA;
pub const CL_UNSIGNED_INT16: u32 = 0x10DB;
pub const CL_UNSIGNED_INT32: u32 = 0x10DC;
pub const CL_HALF_FLOAT: u32 = 0x10DD;
pub const CL_FLOAT: u32 = 0x10DE;

/* SAMPLER */
pub const CL_ADDRESS_NONE: u32 = 0x1130;
pub const CL_ADDRESS_CLAMP_TO_EDGE: u32 = 0x1131;
pub const CL_ADDRESS_CLAMP: u32 = 0x1132;
pub const CL_ADDRESS_REPEAT: u32 = 0x1133;
pub const CL_ADDRESS_MIRRORED_REPEAT: u32 = 0x1134;

pub const CL_FILTER_NEAREST: u32 = 0x1140;
pub const CL_FILTER_LINEAR: u32 = 0x1141;

pub const CL_SAMPLER_REFERENCE_COUNT: u32 = 0x1150;
pub const CL_SAMPLER_CONTEXT: u32 = 0x1151;
pub const CL_SAMPLER_NORMALIZED_COORDS: u32 = 0x1152;
pub const CL_SAMPLER_ADDRESSING_MODE: u32 = 0x1153;
pub const CL_SAMPLER_FILTER_MODE: u32 = 0x1154;

/* PROGRAM */
pub const CL_PROGRAM_REFERENCE_COUNT: u32 = 0x1160;
pub const CL_PROGRAM_CONTEXT: u32 = 0x1161;
pub const CL_PROGRAM_NUM_DEVICES: u32 = 0x1162;
pub const CL_PROGRAM_DEVICES: u32 = 0x1163;
pub const CL_PROGRAM_SOURCE: u32 = 0x1164;

pub const CL_PROGRAM_BUILD_STATUS: u32 = 0x1181;
pub const CL_PROGRAM_BUILD_OPTIONS: u32 = 0x1182;
pub const CL_PROGRAM_BUILD_LOG: u32 = 0x1183;

/* KERNEL */
pub const CL_KERNEL_FUNCTION_NAME: u32 = 0x1190;
pub const CL_KERNEL_NUM_ARGS: u32 = 0x1191;
pub const CL_KERNEL_REFERENCE_COUNT: u32 = 0x1192;
pub const CL_KERNEL_CONTEXT: u32 = 0x1193;
pub const CL_KERNEL_PROGRAM: u32 = 0x1194;

pub const CL_KERNEL_ARG_ADDRESS_QUALIFIER: u32 = 0x1196;
pub const CL_KERNEL_ARG_ACCESS_QUALIFIER: u32 = 0x1197;
pub const CL_KERNEL_ARG_TYPE_NAME: u32 = 0x1198;
pub const CL_KERNEL_ARG_TYPE_QUALIFIER: u32 = 0x1199;
pub const CL_KERNEL_ARG_NAME: u32 = 0x119A;

pub const CL_KERNEL_WORK_GROUP_SIZE: u32 = 0x11B0;
pub const CL_KERNEL_COMPILE_WORK_GROUP_SIZE: u32 = 0x11B1;
pub const CL_KERNEL_LOCAL_MEM_SIZE: u32 = 0x11B2;

/* EVENT */
pub const CL_EVENT_COMMAND_QUEUE: u32 = 0x11D0;
pub const CL_EVENT_COMMAND_TYPE: u32 = 0x11D1;
pub const CL_EVENT_REFERENCE_COUNT: u32 = 0x11D2;
pub const CL_EVENT_COMMAND_EXECUTION_STATUS: u32 = 0x11D3;
pub const CL_EVENT_CONTEXT: u32 = 0x11D4;

pub const CL_PROFILING_COMMAND_QUEUED: u32 = 0x1280;
pub const CL_PROFILING_COMMAND_SUBMIT: u32 = 0x1281;
pub const CL_PROFILING_COMMAND_START: u32 = 0x1282;
pub const CL_PROFILING_COMMAND_END: u32 = 0x1283;
