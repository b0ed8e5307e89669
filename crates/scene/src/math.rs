//! Transform math shared by nodes, the graph and the orbit controller.
//!
//! All matrices are column-major, right-handed, with OpenGL clip
//! conventions (depth in `[-1, 1]`). Cameras look down their local `-Z`.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::error::{SceneError, SceneResult};

/// Squared length below which a direction is treated as zero.
const BASIS_EPSILON_SQ: f32 = 1e-10;

/// Compose a local-to-world matrix as `Translation * Rotation * Scale`.
///
/// The multiplication order is fixed: scale is applied first, then
/// rotation, then translation.
pub fn compose(position: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_quat(rotation) * Mat4::from_scale(scale)
}

/// Split a matrix produced by [`compose`] back into position, rotation
/// and scale.
pub fn decompose(matrix: &Mat4) -> (Vec3, Quat, Vec3) {
    let (scale, rotation, position) = matrix.to_scale_rotation_translation();
    (position, rotation, scale)
}

/// Build the orthonormal camera basis `(right, up, forward)` for an eye
/// looking at a target.
///
/// When `forward` is parallel to `up` the cross product vanishes; `-Z` and
/// then `+X` are tried as replacement up axes so a camera looking straight
/// down still gets a finite basis.
pub fn view_basis(eye: Vec3, target: Vec3, up: Vec3) -> SceneResult<(Vec3, Vec3, Vec3)> {
    let offset = target - eye;
    if !offset.is_finite() || offset.length_squared() < BASIS_EPSILON_SQ {
        return Err(SceneError::DegenerateBasis);
    }
    let forward = offset.normalize();

    let right = [up, Vec3::NEG_Z, Vec3::X]
        .into_iter()
        .map(|candidate| forward.cross(candidate))
        .find(|right| right.length_squared() > BASIS_EPSILON_SQ)
        .ok_or(SceneError::DegenerateBasis)?
        .normalize();
    let actual_up = right.cross(forward);

    Ok((right, actual_up, forward))
}

/// Rotation that points a camera at `eye` towards `target`.
///
/// The returned quaternion maps the camera's local axes onto the basis
/// `(right, up, -forward)` from [`view_basis`].
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> SceneResult<Quat> {
    let (right, actual_up, forward) = view_basis(eye, target, up)?;
    let basis = Mat3::from_cols(right, actual_up, -forward);
    Ok(Quat::from_mat3(&basis).normalize())
}

/// Perspective projection with a vertical field of view in degrees.
pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> SceneResult<Mat4> {
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return Err(SceneError::invalid_range(
            "fov",
            format!("{fov_y_degrees} degrees is outside (0, 180)"),
        ));
    }
    if !(aspect > 0.0) || !aspect.is_finite() {
        return Err(SceneError::invalid_range(
            "aspect",
            format!("{aspect} must be positive"),
        ));
    }
    validate_clip_planes(near, far)?;

    Ok(Mat4::perspective_rh_gl(
        degrees_to_radians(fov_y_degrees),
        aspect,
        near,
        far,
    ))
}

/// Orthographic projection over an explicit view volume.
pub fn orthographic(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> SceneResult<Mat4> {
    if right == left || !(right - left).is_finite() {
        return Err(SceneError::invalid_range(
            "left/right",
            format!("left {left} and right {right} span no width"),
        ));
    }
    if top == bottom || !(top - bottom).is_finite() {
        return Err(SceneError::invalid_range(
            "bottom/top",
            format!("bottom {bottom} and top {top} span no height"),
        ));
    }
    if !(far > near) {
        return Err(SceneError::invalid_range(
            "far",
            format!("far plane {far} must exceed near plane {near}"),
        ));
    }

    Ok(Mat4::orthographic_rh_gl(left, right, bottom, top, near, far))
}

/// Check a perspective near/far pair.
pub fn validate_clip_planes(near: f32, far: f32) -> SceneResult<()> {
    if !(near > 0.0) {
        return Err(SceneError::invalid_range(
            "near",
            format!("near plane {near} must be positive"),
        ));
    }
    if !(far > near) || !far.is_finite() {
        return Err(SceneError::invalid_range(
            "far",
            format!("far plane {far} must exceed near plane {near}"),
        ));
    }
    Ok(())
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}
