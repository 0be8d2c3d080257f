use super::*;
use crate::alloc_hook::{AllocationHarness, HarnessConfig};

#[test]
fn absent_queue_is_zero_effect() {
  let mut buffer = [9_u8; 4];

  assert!(!insert_head::<crate::SystemAllocation>(None, "a"));
  assert!(!insert_tail::<crate::SystemAllocation>(None, "a"));
  assert!(!remove_head::<crate::SystemAllocation>(None, Some(&mut buffer)));
  assert_eq!(size::<crate::SystemAllocation>(None), 0);
  reverse::<crate::SystemAllocation>(None);
  destroy::<crate::SystemAllocation>(None);

  assert_eq!(buffer, [9; 4]);
}

#[test]
fn fresh_queue_has_nothing_to_remove() {
  let mut queue = create();

  assert_eq!(size(queue.as_ref()), 0);
  assert!(!remove_head(queue.as_mut(), None));
  destroy(queue);
}

#[test]
fn scenario_insert_reverse_remove() {
  let mut queue = create();
  assert!(insert_tail(queue.as_mut(), "a"));
  assert!(insert_tail(queue.as_mut(), "b"));
  assert!(insert_head(queue.as_mut(), "c"));
  assert_eq!(size(queue.as_ref()), 3);

  reverse(queue.as_mut());

  let mut removed = std::vec::Vec::new();
  let mut buffer = [0_u8; 8];
  while remove_head(queue.as_mut(), Some(&mut buffer)) {
    let end = buffer.iter().position(|byte| *byte == 0).unwrap();
    removed.push(std::string::String::from_utf8(buffer[..end].to_vec()).unwrap());
  }
  assert_eq!(removed, ["b", "a", "c"]);
  assert_eq!(size(queue.as_ref()), 0);
  destroy(queue);
}

#[test]
fn round_trip_restores_size() {
  let mut queue = create();
  let mut buffer = [0xaa_u8; 16];

  assert!(insert_tail(queue.as_mut(), "x"));
  assert!(remove_head(queue.as_mut(), Some(&mut buffer)));
  assert_eq!(&buffer[..2], b"x\0");
  assert_eq!(size(queue.as_ref()), 0);

  assert!(insert_tail(queue.as_mut(), "first"));
  let before = size(queue.as_ref());
  assert!(insert_tail(queue.as_mut(), "x"));
  assert!(remove_head(queue.as_mut(), None));
  assert_eq!(size(queue.as_ref()), before);
  destroy(queue);
}

#[test]
fn refused_creation_yields_absent_queue() {
  let harness = AllocationHarness::with_config(HarnessConfig::new().with_fail_next(1));
  let mut queue = create_with_hook(&harness);

  assert!(queue.is_none());
  assert!(!insert_tail(queue.as_mut(), "a"));
  assert_eq!(size(queue.as_ref()), 0);
  reverse(queue.as_mut());
  destroy(queue);
  assert_eq!(harness.live_blocks(), 0);
}

#[test]
fn size_tracks_successful_operations_under_fault_injection() {
  let harness = AllocationHarness::with_config(HarnessConfig::new().with_fail_every(5));
  let mut queue = create_with_hook(&harness);
  assert!(queue.is_some());

  let mut expected = 0_usize;
  for step in 0..60 {
    let succeeded = match step % 4 {
      | 0 => insert_tail(queue.as_mut(), "tail"),
      | 1 => insert_head(queue.as_mut(), "head"),
      | 2 => {
        reverse(queue.as_mut());
        insert_tail(queue.as_mut(), "again")
      },
      | _ => {
        let removed = remove_head(queue.as_mut(), None);
        if removed {
          expected -= 1;
        }
        assert_eq!(size(queue.as_ref()), expected);
        continue;
      },
    };
    if succeeded {
      expected += 1;
    }
    assert_eq!(size(queue.as_ref()), expected);
  }

  assert!(harness.failures() > 0);
  destroy(queue);
  assert_eq!(harness.live_blocks(), 0);
  assert_eq!(harness.live_bytes(), 0);
}
