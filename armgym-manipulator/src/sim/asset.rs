//! Built-in body tables of [`KinematicSim`](super::KinematicSim).
//!
//! The tables list the joints and parts the tasks address by name, with a
//! simplified placement model for each part. They stand in for the engine's
//! asset loader and carry no mass, inertia or collision geometry.
use crate::geometry::Vec3;

/// Kind of a 1-DOF joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JointKind {
    /// Rotational joint.
    Hinge,

    /// Sliding joint translating `part` along world axis `axis`.
    Slide {
        /// Name of the part carried by the joint.
        part: &'static str,
        /// World axis index, 0 to 2.
        axis: usize,
    },
}

/// A named joint.
#[derive(Clone, Copy, Debug)]
pub struct JointDesc {
    /// Joint name.
    pub name: &'static str,
    /// Joint kind.
    pub kind: JointKind,
}

/// How the world position of a part is derived.
#[derive(Clone, Copy, Debug)]
pub enum Mount {
    /// At `origin`, shifted by the slide joints that carry the part.
    Fixed,

    /// Free-floating; at the last pose set by a pose reset, `origin` initially.
    Free,

    /// End of a planar chain of hinge joints rooted at `origin`.
    /// Each entry is `(joint name, link length)`.
    Linkage(&'static [(&'static str, f64)]),
}

/// A named rigid part.
#[derive(Clone, Copy, Debug)]
pub struct PartDesc {
    /// Part name.
    pub name: &'static str,
    /// Initial world position.
    pub origin: Vec3,
    /// Placement model.
    pub mount: Mount,
}

/// Joint and part tables of an asset.
#[derive(Debug)]
pub struct BodyDesc {
    /// Asset id.
    pub asset_id: &'static str,
    /// Joints, in engine order.
    pub joints: &'static [JointDesc],
    /// Parts.
    pub parts: &'static [PartDesc],
}

const fn hinge(name: &'static str) -> JointDesc {
    JointDesc {
        name,
        kind: JointKind::Hinge,
    }
}

const fn slide(name: &'static str, part: &'static str, axis: usize) -> JointDesc {
    JointDesc {
        name,
        kind: JointKind::Slide { part, axis },
    }
}

const fn part(name: &'static str, origin: Vec3, mount: Mount) -> PartDesc {
    PartDesc {
        name,
        origin,
        mount,
    }
}

static REACHER: BodyDesc = BodyDesc {
    asset_id: "reacher.xml",
    joints: &[
        hinge("joint0"),
        hinge("joint1"),
        slide("target_x", "target", 0),
        slide("target_y", "target", 1),
    ],
    parts: &[
        part("body0", [0.0, 0.0, 0.01], Mount::Fixed),
        part(
            "fingertip",
            [0.0, 0.0, 0.01],
            Mount::Linkage(&[("joint0", 0.1), ("joint1", 0.11)]),
        ),
        part("target", [0.0, 0.0, 0.01], Mount::Fixed),
    ],
};

static PUSHER: BodyDesc = BodyDesc {
    asset_id: "pusher.xml",
    joints: &[
        hinge("r_shoulder_pan_joint"),
        hinge("r_shoulder_lift_joint"),
        hinge("r_upper_arm_roll_joint"),
        hinge("r_elbow_flex_joint"),
        hinge("r_forearm_roll_joint"),
        hinge("r_wrist_flex_joint"),
        hinge("r_wrist_roll_joint"),
        slide("obj_slidex", "object", 0),
        slide("obj_slidey", "object", 1),
        slide("goal_slidex", "goal", 0),
        slide("goal_slidey", "goal", 1),
    ],
    parts: &[
        part("body0", [0.0, -0.6, 0.0], Mount::Fixed),
        part("tips_arm", [0.32, -0.6, -0.1], Mount::Fixed),
        part("object", [0.45, 0.55, -0.275], Mount::Fixed),
        part("goal", [0.45, 0.55, -0.323], Mount::Fixed),
    ],
};

static STRIKER: BodyDesc = BodyDesc {
    asset_id: "striker.xml",
    joints: &[
        hinge("r_shoulder_pan_joint"),
        hinge("r_shoulder_lift_joint"),
        hinge("r_upper_arm_roll_joint"),
        hinge("r_elbow_flex_joint"),
        hinge("r_forearm_roll_joint"),
        hinge("r_wrist_flex_joint"),
        hinge("r_wrist_roll_joint"),
        slide("obj_slidex", "object", 0),
        slide("obj_slidey", "object", 1),
        slide("goal_slidex", "coaster", 0),
        slide("goal_slidey", "coaster", 1),
    ],
    parts: &[
        part("body0", [0.0, -0.6, 0.0], Mount::Fixed),
        part("tips_arm", [0.32, -0.6, -0.1], Mount::Fixed),
        part("object", [0.45, 0.55, -0.275], Mount::Fixed),
        part("coaster", [0.45, 0.55, -0.323], Mount::Fixed),
    ],
};

static THROWER: BodyDesc = BodyDesc {
    asset_id: "thrower.xml",
    joints: &[
        hinge("r_shoulder_pan_joint"),
        hinge("r_shoulder_lift_joint"),
        hinge("r_upper_arm_roll_joint"),
        hinge("r_elbow_flex_joint"),
        hinge("r_forearm_roll_joint"),
        hinge("r_wrist_flex_joint"),
        hinge("r_wrist_roll_joint"),
    ],
    parts: &[
        part("body0", [0.0, -0.6, 0.0], Mount::Fixed),
        part("r_wrist_roll_link", [0.32, -0.6, 0.0], Mount::Fixed),
        part("ball", [0.5, -0.1, -0.25], Mount::Free),
        part("goal", [0.45, -0.05, -0.3], Mount::Free),
    ],
};

/// Looks up a built-in body by asset id.
pub(crate) fn builtin(asset_id: &str) -> Option<&'static BodyDesc> {
    [&REACHER, &PUSHER, &STRIKER, &THROWER]
        .into_iter()
        .find(|body| body.asset_id == asset_id)
}
