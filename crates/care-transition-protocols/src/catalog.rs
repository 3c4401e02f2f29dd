//! Static task text for the decompensated heart failure follow-up protocol.
//!
//! The text is the clinical source of truth and is reproduced verbatim from
//! the published protocol. Code in this module only stores it; the lookup
//! logic lives in the crate root.

use super::{ProtocolDay, Role};

/// Protocol title shown above every checklist.
pub const PROTOCOL_TITLE: &str = "Progressive Decompensated Heart Failure Workflow";

/// Disclaimer shown above every checklist.
pub const PROTOCOL_DISCLAIMER: &str = "\
This application is for educational and training purposes only. \
The protocol serves as a general guideline and does not replace clinical judgment. \
Clinical decisions must always be individualized to each patient's unique situation.

The acute heart failure episode is managed over a 6-day period. \
Day 1 is the initial evaluation by the Advanced Care Paramedic.";

const TRIAGE_NURSE_DAY_1: &str = "\
1. After identifying and stratifying a patient with progressive moderate to severe symptoms, \
send a message to the Advanced Care Paramedic via Teams.
   ➤ Include: NCCC, CRNP, and YC Physician.
   ➤ Add the Cardiologist and Nephrologist if available in the Blue Sticky Note.

2. Upon receipt of the Medic’s Day 1 Summary via Teams:
   a. Complete a summary in Epic.
   b. Send a priority telephonic encounter to:
      - NCCC
      - CRNP
      - YC Physician
      - Scheduling
      - Community Health Worker (CHW)";

const TRIAGE_NURSE_DAY_2: &str = "\
1. Upon receipt of the Medic’s Day 2 Summary in Teams:
   a. Transfer the Day 2 summary to Epic as a Priority Telephonic Encounter.
   b. Share with:
      - NCCC
      - CRNP
      - YC Physician
      - Community Health Worker (CHW)
      - Scheduling";

const PARAMEDIC_DAY_1: &str = "\
Clinical Assessment & Treatment
1. Determine the need for IV loop diuretic.
2. Order CBC, CMP, BNP, TSH, chest X-ray, EKG if necessary.
3. Document historical & current weight.
4. Take a clinical image of lower extremities and upload to Epic via Haiku.
5. Provide tools to measure urine output (urinal/hat/graduated cylinder).
6. Decide on leaving IV access (follow home IV policy).

Communication
1. Confirm Day 2 follow-up method with patient/family.
2. Leave a phone appointment card.
3. Send Day 1 summary to the Triage Nurse via Teams.";

const PARAMEDIC_DAY_2: &str = "\
Follow-Up
1. Perform a follow-up phone call to the patient or family.
2. Confirm response to treatment (>3 lbs weight loss when possible).
3. Review testing results.
4. Determine the need for a second-day medic's visit.
5. Send Day 2 summary with recommendations to the Triage Nurse via Teams.

If Unreachable
1. Request a Community Health Worker (CHW) to perform a wellness visit.";

const SCHEDULING_DAY_1: &str = "\
1. Upon receipt of the Medic’s Day 1 Summary via Teams (from Intake):
   - Schedule in-person visit with CRNP or YC Physician on Day 2 \
(based on Zip Code distribution & availability).
   - Schedule an NCCC in-person visit on Day 4.
   - Add to CRNP acute list & IDT weekly list.
   - Create an acute episode in the Excel acute spreadsheet.";

const SCHEDULING_DAY_6: &str = "\
1. Upon receipt of the NCCC message via Epic:
   - Close the acute episode in the Excel acute spreadsheet.";

const CHW_DAY_1: &str = "1. Plan to schedule a wellness visit on Day 2 if necessary.";

const CHW_DAY_2: &str = "\
1. Perform a wellness visit if the medics cannot reach the patient.
2. Inform Physician, CRNP, and NCCC scheduled to see the patient of the visit’s outcome.";

const CRNP_PHYSICIAN_DAY_1: &str = "\
- Upon receipt of Day 1 Medic's Summary (priority telephonic message in Epic):
  If an in-person visit is not scheduled on Day 2, schedule one.
- Share a brief of Day 1 Summary with PCP, Cardiology, and Nephrology.
- Inform them of the planned in-person visit on Day 2.";

const CRNP_PHYSICIAN_DAY_2: &str = "\
1. Assess response to treatment (symptoms, weight, urine output).
2. Take a clinical image of lower extremities, upload to Epic via Haiku.
3. Review labs ordered by medics on Day 1.
4. Review hospitalist recommendations.
5. Place a request for a STAT lab on Day 4 (CBC, CMP, BMP, BNP, Mg, TSH).
6. Initiate goals-of-care discussion; identify end-of-life patients.
7. Notify the Clinical Operations Manager to add to the end-of-life workflow (Epic Staff message).
8. Update NCCC, PCP, Cardiology, and Nephrology.";

const CRNP_PHYSICIAN_DAY_5: &str = "\
1. Review lab results and discuss with the patient or family.
2. Share findings with NCCC, PCP, Cardiology, and Nephrology.
3. Schedule a routine follow-up visit.";

const NCCC_DAY_1: &str = "\
- Upon receipt of Day 1 Medic's Summary (priority telephonic encounter):
  ▪ Schedule a phone call for Day 3.
  ▪ If not already done, arrange an in-person visit on Day 4.
  ▪ Prepare to obtain labs (CBC, BMP, BNP, Mg, TSH) on Day 4.";

const NCCC_DAY_3: &str = "\
1. Confirm stability (weight loss, SOB, weakness, dizziness).
2. Reinforce CRNP/YC diuretic instructions.";

const NCCC_DAY_4: &str = "\
1. Assess response to treatment (symptoms, weight, urine output).
2. Identify causes of recent decompensation.
3. Obtain labs ordered by CRNP/YC on Day 2.
4. Confirm updated diuretic treatment.
5. Take a clinical image of lower extremities, upload to Epic via Haiku.
6. Engage behavioral health/social work as needed.
7. Align care with goals of care.
8. Schedule follow-up phone call for Day 6.";

const NCCC_DAY_6: &str = "\
1. Confirm return to baseline.
2. Confirm current medications & update Epic EMR.
3. Schedule a routine NCCC visit.
4. Encourage follow-up with PCP, Cardiology, Nephrology.
5. Close acute episode & report to Scheduling.";

/// Task text for a (role, day) pair, or `None` when the protocol assigns the
/// role nothing that day. CRNP and Physician share one checklist.
pub(crate) fn task_text(role: Role, day: ProtocolDay) -> Option<&'static str> {
    use ProtocolDay::*;
    use Role::*;

    match (role, day) {
        (TriageNurse, Day1) => Some(TRIAGE_NURSE_DAY_1),
        (TriageNurse, Day2) => Some(TRIAGE_NURSE_DAY_2),
        (AdvancedCareParamedic, Day1) => Some(PARAMEDIC_DAY_1),
        (AdvancedCareParamedic, Day2) => Some(PARAMEDIC_DAY_2),
        (SchedulingCoordinator, Day1) => Some(SCHEDULING_DAY_1),
        (SchedulingCoordinator, Day6) => Some(SCHEDULING_DAY_6),
        (CommunityHealthWorker, Day1) => Some(CHW_DAY_1),
        (CommunityHealthWorker, Day2) => Some(CHW_DAY_2),
        (Crnp | Physician, Day1) => Some(CRNP_PHYSICIAN_DAY_1),
        (Crnp | Physician, Day2) => Some(CRNP_PHYSICIAN_DAY_2),
        (Crnp | Physician, Day5) => Some(CRNP_PHYSICIAN_DAY_5),
        (NurseClinicalCareCoordinator, Day1) => Some(NCCC_DAY_1),
        (NurseClinicalCareCoordinator, Day3) => Some(NCCC_DAY_3),
        (NurseClinicalCareCoordinator, Day4) => Some(NCCC_DAY_4),
        (NurseClinicalCareCoordinator, Day6) => Some(NCCC_DAY_6),
        _ => None,
    }
}
