//! NIfTI mask I/O
//!
//! Loads NIfTI volumes from byte arrays or files as binary masks and writes
//! masks back as uint8 NIfTI-1 files (.nii or .nii.gz).

use std::io::Cursor;
use nifti::{NiftiObject, InMemNiftiObject, NiftiHeader};
use nifti::volume::ndarray::IntoNdArray;
use flate2::read::GzDecoder;
use ndarray::Array;

use crate::volume::Volume;

/// Binary mask loaded from a NIfTI file
pub struct NiftiMask {
    /// Mask volume, every voxel 0 or 1
    pub volume: Volume,
    /// Voxel sizes in mm
    pub voxel_size: (f64, f64, f64),
    /// Affine transformation matrix (4x4, row-major)
    pub affine: [f64; 16],
}

/// Check if bytes are gzip compressed
fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

/// Get header info for diagnostics
fn get_header_info(bytes: &[u8]) -> String {
    if bytes.len() < 348 {
        return format!("File too small ({} bytes, need at least 348)", bytes.len());
    }

    let sizeof_hdr = i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let magic = String::from_utf8_lossy(&bytes[344..348]).to_string();
    let datatype = i16::from_le_bytes([bytes[70], bytes[71]]);

    format!("sizeof_hdr={}, magic='{}', datatype={}", sizeof_hdr, magic, datatype)
}

fn read_object(bytes: &[u8]) -> Result<InMemNiftiObject, String> {
    if is_gzip(bytes) {
        InMemNiftiObject::from_reader(GzDecoder::new(Cursor::new(bytes)))
            .map_err(|e| {
                let mut decompressed = Vec::new();
                let mut decoder = GzDecoder::new(Cursor::new(bytes));
                let info = if std::io::Read::read_to_end(&mut decoder, &mut decompressed).is_ok() {
                    get_header_info(&decompressed)
                } else {
                    "Could not decompress".to_string()
                };
                format!("Failed to read gzipped NIfTI: {} ({})", e, info)
            })
    } else {
        InMemNiftiObject::from_reader(Cursor::new(bytes))
            .map_err(|e| format!("Failed to read NIfTI: {} ({})", e, get_header_info(bytes)))
    }
}

/// Load a NIfTI volume from bytes as a binary mask
///
/// Any non-zero voxel becomes foreground. 4D files contribute their first
/// volume. Supports both .nii and .nii.gz (gzip is auto-detected).
pub fn load_mask(bytes: &[u8]) -> Result<NiftiMask, String> {
    let obj = read_object(bytes)?;
    let header = obj.header();

    let ndim = header.dim[0] as usize;
    if ndim < 3 {
        return Err(format!("Expected at least 3D volume, got {}D", ndim));
    }

    let pixdim = header.pixdim;
    let voxel_size = (pixdim[1] as f64, pixdim[2] as f64, pixdim[3] as f64);
    let affine = get_affine(header);

    let array: Array<f64, _> = obj.into_volume().into_ndarray()
        .map_err(|e| format!("Failed to convert to ndarray: {}", e))?;

    let shape = array.shape().to_vec();
    if shape.len() < 3 {
        return Err(format!("Expected at least 3D array, got {}D", shape.len()));
    }
    let (nx, ny, nz) = (shape[0], shape[1], shape[2]);

    // Fortran order (x varies fastest) to match NIfTI convention
    let mut data = Vec::with_capacity(nx * ny * nz);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let v = if shape.len() == 3 { array[[i, j, k]] } else { array[[i, j, k, 0]] };
                data.push(if v != 0.0 { 1u8 } else { 0u8 });
            }
        }
    }

    Ok(NiftiMask {
        volume: Volume::from_vec(data, nx, ny, nz)?,
        voxel_size,
        affine,
    })
}

/// Get affine transformation matrix from header
fn get_affine(header: &NiftiHeader) -> [f64; 16] {
    // Prefer sform if available (sform_code > 0)
    if header.sform_code > 0 {
        let s = &header.srow_x;
        let t = &header.srow_y;
        let u = &header.srow_z;
        [
            s[0] as f64, s[1] as f64, s[2] as f64, s[3] as f64,
            t[0] as f64, t[1] as f64, t[2] as f64, t[3] as f64,
            u[0] as f64, u[1] as f64, u[2] as f64, u[3] as f64,
            0.0, 0.0, 0.0, 1.0,
        ]
    } else {
        [
            header.pixdim[1] as f64, 0.0, 0.0, 0.0,
            0.0, header.pixdim[2] as f64, 0.0, 0.0,
            0.0, 0.0, header.pixdim[3] as f64, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]
    }
}

/// Save a mask as uint8 NIfTI bytes (.nii)
pub fn save_mask(
    volume: &Volume,
    voxel_size: (f64, f64, f64),
    affine: &[f64; 16],
) -> Result<Vec<u8>, String> {
    use std::io::Write;

    let (nx, ny, nz) = volume.dims();
    let dims_i16 = |n: usize| i16::try_from(n)
        .map_err(|_| format!("Dimension {} does not fit in a NIfTI-1 header", n));
    let dim: [i16; 8] = [3, dims_i16(nx)?, dims_i16(ny)?, dims_i16(nz)?, 1, 1, 1, 1];

    let mut header = [0u8; 348];
    header[0..4].copy_from_slice(&348i32.to_le_bytes());

    for (i, &d) in dim.iter().enumerate() {
        let offset = 40 + i * 2;
        header[offset..offset + 2].copy_from_slice(&d.to_le_bytes());
    }

    // datatype = 2 (UINT8), bitpix = 8
    header[70..72].copy_from_slice(&2i16.to_le_bytes());
    header[72..74].copy_from_slice(&8i16.to_le_bytes());

    let (vsx, vsy, vsz) = voxel_size;
    let pixdim: [f32; 8] = [1.0, vsx as f32, vsy as f32, vsz as f32, 1.0, 1.0, 1.0, 1.0];
    for (i, &p) in pixdim.iter().enumerate() {
        let offset = 76 + i * 4;
        header[offset..offset + 4].copy_from_slice(&p.to_le_bytes());
    }

    // vox_offset = 352 (header + 4 bytes extension), unit scaling
    header[108..112].copy_from_slice(&352.0f32.to_le_bytes());
    header[112..116].copy_from_slice(&1.0f32.to_le_bytes());
    header[116..120].copy_from_slice(&0.0f32.to_le_bytes());

    // sform_code = 1 (scanner anat)
    header[254..256].copy_from_slice(&1i16.to_le_bytes());
    for row in 0..3 {
        for col in 0..4 {
            let offset = 280 + row * 16 + col * 4;
            let value = affine[row * 4 + col] as f32;
            header[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        }
    }

    header[344..348].copy_from_slice(b"n+1\0");

    let mut buffer = Vec::with_capacity(352 + volume.as_slice().len());
    buffer.write_all(&header).map_err(|e| format!("Write header failed: {}", e))?;
    buffer.write_all(&[0u8; 4]).map_err(|e| format!("Write extension failed: {}", e))?;
    buffer.write_all(volume.as_slice()).map_err(|e| format!("Write data failed: {}", e))?;

    Ok(buffer)
}

/// Save a mask as gzipped NIfTI bytes (.nii.gz)
pub fn save_mask_gz(
    volume: &Volume,
    voxel_size: (f64, f64, f64),
    affine: &[f64; 16],
) -> Result<Vec<u8>, String> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let uncompressed = save_mask(volume, voxel_size, affine)?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&uncompressed)
        .map_err(|e| format!("Gzip compression failed: {}", e))?;

    encoder.finish()
        .map_err(|e| format!("Gzip finish failed: {}", e))
}

/// Read a NIfTI mask from a filesystem path
pub fn read_mask_file(path: &std::path::Path) -> Result<NiftiMask, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;
    load_mask(&bytes)
}

/// Save a mask to a file
///
/// If the path ends with .nii.gz, the file is gzip compressed.
pub fn save_mask_to_file(
    path: &std::path::Path,
    volume: &Volume,
    voxel_size: (f64, f64, f64),
    affine: &[f64; 16],
) -> Result<(), String> {
    let bytes = if path.to_string_lossy().ends_with(".nii.gz") {
        save_mask_gz(volume, voxel_size, affine)?
    } else {
        save_mask(volume, voxel_size, affine)?
    };

    std::fs::write(path, &bytes)
        .map_err(|e| format!("Failed to write file '{}': {}", path.display(), e))
}
