//! An engine-free simulation backend.
use super::{
    asset::{builtin, BodyDesc, JointKind, Mount},
    ContactEvent, JointHandle, PartHandle, SimError, Simulation,
};
use crate::geometry::{Quat, Vec3, IDENTITY_QUAT};
use log::trace;

/// Engine step in seconds.
const DT: f64 = 0.0165;

#[derive(Clone, Debug)]
struct JointState {
    position: f64,
    velocity: f64,
    torque: f64,
}

#[derive(Clone, Debug)]
struct PartState {
    position: Vec3,
    orientation: Quat,
}

/// Kinematic stand-in for a physics engine.
///
/// Joints have unit inertia and no limits; a commanded torque accelerates its joint
/// for one step (semi-implicit Euler) and is then cleared. Slide joints translate
/// the part they carry, linkage parts follow forward kinematics of their hinge
/// chain, free parts stay where they were last put. There are no collisions;
/// contact events are injected with [`KinematicSim::push_contact`].
#[derive(Clone, Debug)]
pub struct KinematicSim {
    body: &'static BodyDesc,
    joints: Vec<JointState>,
    parts: Vec<PartState>,
    contacts: Vec<ContactEvent>,
}

impl KinematicSim {
    /// Builds a simulation of `body` with every joint at rest at zero.
    pub fn from_body(body: &'static BodyDesc) -> Self {
        let joints = body
            .joints
            .iter()
            .map(|_| JointState {
                position: 0.0,
                velocity: 0.0,
                torque: 0.0,
            })
            .collect();
        let parts = body
            .parts
            .iter()
            .map(|p| PartState {
                position: p.origin,
                orientation: IDENTITY_QUAT,
            })
            .collect();

        Self {
            body,
            joints,
            parts,
            contacts: Vec::new(),
        }
    }

    /// Torque commanded on `joint` for the next step.
    pub fn motor_torque(&self, joint: JointHandle) -> f64 {
        self.joints[joint.index()].torque
    }

    /// Orientation of a part.
    pub fn part_orientation(&self, part: PartHandle) -> Quat {
        self.parts[part.index()].orientation
    }

    /// Queues a contact event, reported by the next [`Simulation::drain_contacts`].
    pub fn push_contact(&mut self, event: ContactEvent) {
        self.contacts.push(event);
    }

    fn joint_by_name(&self, name: &str) -> Option<&JointState> {
        self.body
            .joints
            .iter()
            .position(|j| j.name == name)
            .map(|ix| &self.joints[ix])
    }
}

impl Simulation for KinematicSim {
    fn load(asset_id: &str, root_part: &str) -> Result<Self, SimError> {
        let body = builtin(asset_id).ok_or_else(|| SimError::UnknownAsset(asset_id.to_string()))?;
        let sim = Self::from_body(body);
        sim.part(root_part)?;
        trace!("KinematicSim::load({})", asset_id);
        Ok(sim)
    }

    fn joint(&self, name: &str) -> Result<JointHandle, SimError> {
        self.body
            .joints
            .iter()
            .position(|j| j.name == name)
            .map(JointHandle::new)
            .ok_or_else(|| SimError::MissingJoint(name.to_string()))
    }

    fn part(&self, name: &str) -> Result<PartHandle, SimError> {
        self.body
            .parts
            .iter()
            .position(|p| p.name == name)
            .map(PartHandle::new)
            .ok_or_else(|| SimError::MissingPart(name.to_string()))
    }

    fn joint_state(&self, joint: JointHandle) -> (f64, f64) {
        let j = &self.joints[joint.index()];
        (j.position, j.velocity)
    }

    fn reset_joint(&mut self, joint: JointHandle, position: f64, velocity: f64) {
        let j = &mut self.joints[joint.index()];
        j.position = position;
        j.velocity = velocity;
    }

    fn set_motor_torque(&mut self, joint: JointHandle, torque: f64) {
        self.joints[joint.index()].torque = torque;
    }

    fn part_position(&self, part: PartHandle) -> Vec3 {
        let desc = &self.body.parts[part.index()];
        match desc.mount {
            Mount::Free => self.parts[part.index()].position,
            Mount::Fixed => {
                let mut pos = desc.origin;
                for (j, state) in self.body.joints.iter().zip(&self.joints) {
                    if let JointKind::Slide { part, axis } = j.kind {
                        if part == desc.name {
                            pos[axis] += state.position;
                        }
                    }
                }
                pos
            }
            Mount::Linkage(links) => {
                let mut pos = desc.origin;
                let mut angle = 0.0;
                for (name, length) in links {
                    angle += self.joint_by_name(name).map_or(0.0, |j| j.position);
                    pos[0] += length * angle.cos();
                    pos[1] += length * angle.sin();
                }
                pos
            }
        }
    }

    fn reset_part_pose(&mut self, part: PartHandle, position: Vec3, orientation: Quat) {
        let p = &mut self.parts[part.index()];
        p.position = position;
        p.orientation = orientation;
    }

    fn step(&mut self) -> Result<(), SimError> {
        for j in self.joints.iter_mut() {
            j.velocity += j.torque * DT;
            j.position += j.velocity * DT;
            j.torque = 0.0;
        }
        Ok(())
    }

    fn drain_contacts(&mut self) -> Vec<ContactEvent> {
        std::mem::take(&mut self.contacts)
    }
}
