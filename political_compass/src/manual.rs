/*!

This is the long-form manual for `political_compass` and `compass-export`.

## Input formats

### `questions.csv`

One row per question, with the following columns:

* `pergunta` the text of the question
* `type` the axis of the question: `económico`, `social` or `política`.
  Questions with any other type are exported but do not count toward any score.
* `theme` free text
* `short` `1` if the question belongs to the short version of the survey
* `multiplier` an integer weight. Its sign says in which direction an agreeing
  answer moves the score.
* one column per party, with the answer of the party as an integer, or `NaN`
  if the party did not answer.

Answers must fit in a signed 64-bit integer. A larger number is not read as a
number: it is copied as text into `party_answers.json`, and it is an error if
it appears on a scored question.

The index of a question is its position in the file, starting at 0.

### `party_info.csv`

One row per party, with the columns `party_key`, `abbreviation`, `fullname`,
`leaning`, `programme`, `website` and `party_blurb`. The `party_key` must be
the name of a party column of `questions.csv`.

## Scores

For each axis, the score of a party is:

```text
sum(answer * multiplier) / (number of questions on the axis * 2.0)
```

clamped to [-1, 1]. Answers range from -2 to 2 and multipliers are usually
-1 or 1, so a single question contributes at most 2 in absolute value.
A `NaN` answer contributes 0 but still counts as a question.

An axis without any question is an error.

## Screen position

The economic and social scores are turned into a position on the compass chart:

```text
left = ((economic + 1) / 2) * 100 - offset
top  = ((1 - social) / 2) * 100 - offset
```

The offset (3 by default) centers the logo of the party on its point.

## Configuration

`compass-export` reads `questions.csv` and `party_info.csv` in the current
directory and writes `questions.json`, `party_answers.json` and
`party_info.json` into `src`. All these paths can be changed with command
line flags or with a JSON configuration file:

```text
{
  "questionsPath": "data/questions.csv",
  "partyInfoPath": "data/party_info.csv",
  "outputDirectory": "site/src",
  "referenceDirectory": "expected",
  "markerOffset": 2.5
}
```

Relative paths are resolved against the directory of the configuration file.
*/
